// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the calling layer that sits between a columnar block builder
// and the stateless kernels. It picks the kernel for a column's `ValueType`,
// chains it with zig-zag so that every column ends up as unsigned words, and
// records the side channel each type needs for decoding.
//
// Data Flow (Encoding):
//
//   TypedColumn::Int64 / Int128 -> zigzag                         -> U64 / U128 words
//   TypedColumn::Double         -> decimal (block scale) -> zigzag -> U64 words + ScaleIndex
//   TypedColumn::ObjectId       -> object_id split       -> zigzag -> U64 words + InstanceUnique
//
// Data Flow (Decoding) is the exact reverse, driven by `EncodedColumn`.
//
// The bit-packer itself is not part of this crate; it receives
// `EncodedWords` (or their little-endian bytes) and hands them back.
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

pub use format::{EncodedColumn, EncodedWords, TypedColumn};
pub use stateless_api::{decode_column, encode_column};

#[cfg(test)]
mod tests;
