// In: src/error.rs

//! This module defines the single, unified error type for the crate.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! The per-value codecs never return this type: an unscalable double or a
//! mismatched scale is an expected outcome and is signalled with `None`.
//! `TypeCodecError` covers the boundaries around them (byte parsing, column
//! side channels, configuration).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeCodecError {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Scale index {0} is neither a multiplier index nor the raw-memory sentinel")]
    InvalidScaleIndex(u8),

    #[error("Invalid ObjectId: {0}")]
    InvalidObjectId(String),

    #[error("Instance-unique field must be 5 bytes, got {0}")]
    InstanceUniqueLength(usize),

    #[error("ObjectId column mixes instance-unique fields {first} and {other}")]
    MixedInstanceUnique { first: String, other: String },

    #[error("Encoded column is missing its {0}")]
    MissingSideChannel(&'static str),

    #[error("Value {value} cannot be encoded exactly at scale index {scale_index}")]
    ScaleMismatch { value: f64, scale_index: u8 },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External / Low-Level Errors
    // =========================================================================
    /// An error from the Serde JSON library, typically while loading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Buffer length mismatch: expected a multiple of {0}, got {1}")]
    BufferMismatch(usize, usize),
}
