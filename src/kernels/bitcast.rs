//! This module contains the pure, stateless kernel for bit-casting doubles.
//!
//! It reinterprets an `f64`'s IEEE-754 storage as an `i64` and back with
//! `bytemuck`, so every bit (sign of zero, NaN payload, signalling bit) is
//! kept. The double codec uses it for its raw-memory fallback.

/// Reinterprets the bits of `value` as a signed integer.
#[inline]
pub fn f64_to_raw(value: f64) -> i64 {
    bytemuck::cast(value)
}

/// Reinterprets a signed integer as the `f64` with the same bits.
#[inline]
pub fn raw_to_f64(raw: i64) -> f64 {
    bytemuck::cast(raw)
}

/// Casts a slice of doubles to their bit patterns.
pub fn encode(input_slice: &[f64], output_buf: &mut Vec<i64>) {
    output_buf.clear();
    output_buf.extend_from_slice(bytemuck::cast_slice::<f64, i64>(input_slice));
}

/// Reverses `encode`.
pub fn decode(input_slice: &[i64], output_buf: &mut Vec<f64>) {
    output_buf.clear();
    output_buf.extend_from_slice(bytemuck::cast_slice::<i64, f64>(input_slice));
}

//==================================================================================
// Unit Tests
//==================================================================================
