//! This module defines the semantic value types a caller can hand to the
//! column bridge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a column, which decides the codec applied to it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    Int64,
    Int128,
    Double,
    ObjectId,
}

impl ValueType {
    /// Width in bits of the unsigned words this type is encoded into.
    pub fn encoded_width_bits(&self) -> u32 {
        match self {
            Self::Int128 => 128,
            Self::Int64 | Self::Double | Self::ObjectId => 64,
        }
    }

    /// Returns `true` if decoding this type needs a scale index.
    pub fn needs_scale_index(&self) -> bool {
        matches!(self, Self::Double)
    }

    /// Returns `true` if decoding this type needs the instance-unique bytes.
    pub fn needs_instance_unique(&self) -> bool {
        matches!(self, Self::ObjectId)
    }
}

/// Provides the canonical string representation for a `ValueType`.
impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
