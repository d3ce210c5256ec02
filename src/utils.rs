//! This module provides a set of shared, low-level utility functions used
//! throughout the crate.
//!
//! Its responsibility is converting between raw little-endian byte buffers and
//! typed word vectors, which is how encoded words are handed to (and received
//! from) a byte-oriented bit-packer.

use crate::error::TypeCodecError;

/// Copies a byte slice into a vector of plain-old-data words.
///
/// Unlike a zero-copy cast this does not require the input to be aligned for
/// `T`, which matters for `u128` words read out of an arbitrary `Vec<u8>`.
///
/// # Errors
/// Returns `TypeCodecError::BufferMismatch` if the byte length is not a
/// multiple of `size_of::<T>()`.
pub fn bytes_to_typed_vec<T>(bytes: &[u8]) -> Result<Vec<T>, TypeCodecError>
where
    T: bytemuck::Pod,
{
    let size = std::mem::size_of::<T>();
    if bytes.len() % size != 0 {
        return Err(TypeCodecError::BufferMismatch(size, bytes.len()));
    }
    Ok(bytes
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned::<T>)
        .collect())
}

/// Converts a slice of primitive words into a `Vec<u8>` in native byte order.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
