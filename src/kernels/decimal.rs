//! This module contains the decimal-scaled double codec.
//!
//! Many real-world doubles were entered as short decimals (`21.5`, `1.12`).
//! Multiplying such a value by a small power of ten yields an integer, and
//! that integer packs far better than the IEEE-754 bit pattern. The codec:
//!
//! 1.  Searches `SCALE_MULTIPLIERS` (coarsest first) for the first multiplier
//!     at which `round(value * m) / m` gives back `value` bit-for-bit.
//! 2.  Encodes with a given scale only after re-deriving the value from the
//!     candidate integer and comparing bits. A scale that does not fit the
//!     value yields `None`, never a lossy result.
//! 3.  Falls back to the value's raw bit pattern (`MEMORY_AS_INTEGER`) for
//!     anything the table cannot represent: NaN, infinities, huge magnitudes,
//!     negative zero, or more than eight fractional digits.
//!
//! Rounding uses `f64::round` (half away from zero), so `-x` scales to exactly
//! the negation of `x`.

use crate::error::TypeCodecError;
use crate::kernels::bitcast;
use crate::types::ScaleIndex;

/// Largest magnitude at which every integer is exactly representable by an
/// `f64` (2^53). Scaled values must stay within it.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

//==================================================================================
// 1. Per-Value Codec
//==================================================================================

/// Scales `value` by `multiplier` and verifies the result decodes
/// back to the identical bit pattern.
#[inline]
fn scale_and_verify(value: f64, multiplier: f64) -> Option<i64> {
    // Written so that NaN fails the comparison.
    if !(value.abs() * multiplier <= MAX_EXACT_INTEGER) {
        return None;
    }
    let scaled = (value * multiplier).round();
    if scaled.abs() > MAX_EXACT_INTEGER {
        return None;
    }
    let encoded = scaled as i64;
    let decoded = encoded as f64 / multiplier;
    (decoded.to_bits() == value.to_bits()).then_some(encoded)
}

/// Finds the smallest scale that represents `value` exactly as an integer.
///
/// Returns `None` for non-finite values, for magnitudes above 2^53, and for
/// values that need a finer scale than the table offers.
pub fn calculate_decimal_shift_multiplier(value: f64) -> Option<ScaleIndex> {
    if !value.is_finite() || value.abs() > MAX_EXACT_INTEGER {
        return None;
    }
    ScaleIndex::scaled().find(|scale| {
        scale
            .multiplier()
            .and_then(|m| scale_and_verify(value, m))
            .is_some()
    })
}

/// Encodes `value` at `scale`.
///
/// The raw-memory sentinel always succeeds. Any other scale returns `None`
/// when it cannot reproduce `value` exactly.
pub fn encode_double(value: f64, scale: ScaleIndex) -> Option<i64> {
    match scale.multiplier() {
        None => Some(bitcast::f64_to_raw(value)),
        Some(m) => scale_and_verify(value, m),
    }
}

/// Decodes an integer produced by `encode_double` with the same `scale`.
pub fn decode_double(encoded: i64, scale: ScaleIndex) -> f64 {
    match scale.multiplier() {
        None => bitcast::raw_to_f64(encoded),
        Some(m) => encoded as f64 / m,
    }
}

//==================================================================================
// 2. Block-Level Helpers
//==================================================================================

/// Picks one scale for a whole block of doubles.
///
/// This is the coarsest scale at which every value encodes exactly. Blocks
/// with an unscalable value, or with no common scale, use `MEMORY_AS_INTEGER`.
/// An empty block gets the unscaled index.
pub fn select_block_scale(values: &[f64]) -> ScaleIndex {
    let mut floor = ScaleIndex::UNSCALED;
    for &value in values {
        match calculate_decimal_shift_multiplier(value) {
            Some(scale) => floor = floor.max(scale),
            None => {
                log::debug!(
                    "block of {} doubles falls back to raw memory: {:e} has no decimal scale",
                    values.len(),
                    value
                );
                return ScaleIndex::MEMORY_AS_INTEGER;
            }
        }
    }

    // A value minimal at a coarse scale is not guaranteed to fit a finer one
    // (the 2^53 bound tightens), so every candidate is re-verified.
    ScaleIndex::scaled()
        .filter(|scale| *scale >= floor)
        .find(|scale| values.iter().all(|&v| encode_double(v, *scale).is_some()))
        .unwrap_or(ScaleIndex::MEMORY_AS_INTEGER)
}

/// Encodes a block of doubles at the scale chosen by `select_block_scale`.
pub fn encode_block(values: &[f64], output_buf: &mut Vec<i64>) -> Result<ScaleIndex, TypeCodecError> {
    let scale = select_block_scale(values);
    encode_block_at(values, scale, output_buf)?;
    Ok(scale)
}

/// Encodes a block of doubles at a caller-chosen scale.
///
/// # Errors
/// Returns `TypeCodecError::ScaleMismatch` for the first value that `scale`
/// cannot represent exactly. `output_buf` is left cleared in that case.
pub fn encode_block_at(
    values: &[f64],
    scale: ScaleIndex,
    output_buf: &mut Vec<i64>,
) -> Result<(), TypeCodecError> {
    output_buf.clear();
    if scale.is_memory_as_integer() {
        bitcast::encode(values, output_buf);
        return Ok(());
    }
    output_buf.reserve(values.len());
    for &value in values {
        match encode_double(value, scale) {
            Some(encoded) => output_buf.push(encoded),
            None => {
                output_buf.clear();
                return Err(TypeCodecError::ScaleMismatch {
                    value,
                    scale_index: scale.as_u8(),
                });
            }
        }
    }
    Ok(())
}

/// Decodes a block produced by `encode_block` / `encode_block_at`.
pub fn decode_block(encoded: &[i64], scale: ScaleIndex, output_buf: &mut Vec<f64>) {
    if scale.is_memory_as_integer() {
        bitcast::decode(encoded, output_buf);
        return;
    }
    output_buf.clear();
    output_buf.extend(encoded.iter().map(|&e| decode_double(e, scale)));
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
