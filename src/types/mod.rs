//! This module defines the core, strongly-typed value representations used
//! by the codecs and the column bridge.
//!
//! It includes the `ValueType` enum that selects a codec, the `ScaleIndex`
//! into the fixed decimal multiplier table, and the 12-byte `ObjectId` with its
//! out-of-band `InstanceUnique` field.

pub mod object_id;
pub mod scale_index;
pub mod value_type;

// Re-export the main type(s) for easier access.
pub use object_id::{InstanceUnique, ObjectId};
pub use scale_index::ScaleIndex;
pub use value_type::ValueType;
