//! This module contains the pure, stateless kernels for performing
//! Zig-zag encoding and decoding.
//!
//! This is a lossless, bitwise mapping of signed integers to unsigned integers
//! of the same width. Values near zero map to small unsigned values, so signed
//! data clustered around zero needs few bits once packed. The mapping is a
//! total bijection; there are no error cases.

use num_traits::{PrimInt, Signed, Unsigned, WrappingSub};

use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
#[inline]
pub fn encode_val<T>(n: T) -> T::Unsigned
where
    T: PrimInt + Signed + HasUnsigned,
{
    let bits = T::zero().count_zeros() as usize;
    // (n << 1) ^ (n >> (BITS - 1)); the right shift is arithmetic for signed T.
    ((n << 1) ^ (n >> (bits - 1))).to_unsigned_bits()
}

/// Decodes a single unsigned integer back to its signed representation.
#[inline]
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + WrappingSub + HasSigned,
{
    // (n >> 1) ^ -(n & 1), with the negation done in unsigned arithmetic.
    let sign_mask = U::zero().wrapping_sub(&(n & U::one()));
    ((n >> 1) ^ sign_mask).to_signed_bits()
}

//==================================================================================
// 2. Width-Specific Entry Points
//==================================================================================

pub fn encode_int64(value: i64) -> u64 {
    encode_val(value)
}

pub fn decode_int64(value: u64) -> i64 {
    decode_val(value)
}

pub fn encode_int128(value: i128) -> u128 {
    encode_val(value)
}

pub fn decode_int128(value: u128) -> i128 {
    decode_val(value)
}

//==================================================================================
// 3. Batch API
//==================================================================================

/// Zig-zag encodes every value of `input_slice` into `output_buf`.
pub fn encode<T>(input_slice: &[T], output_buf: &mut Vec<T::Unsigned>)
where
    T: PrimInt + Signed + HasUnsigned,
{
    output_buf.clear();
    output_buf.extend(input_slice.iter().map(|&v| encode_val(v)));
}

/// Reverses `encode`.
pub fn decode<U>(input_slice: &[U], output_buf: &mut Vec<U::Signed>)
where
    U: PrimInt + Unsigned + WrappingSub + HasSigned,
{
    output_buf.clear();
    output_buf.extend(input_slice.iter().map(|&v| decode_val(v)));
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
