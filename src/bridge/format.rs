//! Column containers exchanged across the bridge.

use crate::error::TypeCodecError;
use crate::types::{InstanceUnique, ObjectId, ScaleIndex, ValueType};
use crate::utils::{bytes_to_typed_vec, typed_slice_to_bytes};

/// A column of original values.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedColumn {
    Int64(Vec<i64>),
    Int128(Vec<i128>),
    Double(Vec<f64>),
    ObjectId(Vec<ObjectId>),
}

impl TypedColumn {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int64(_) => ValueType::Int64,
            Self::Int128(_) => ValueType::Int128,
            Self::Double(_) => ValueType::Double,
            Self::ObjectId(_) => ValueType::ObjectId,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Int64(v) => v.len(),
            Self::Int128(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::ObjectId(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unsigned words ready for the bit-packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedWords {
    U64(Vec<u64>),
    U128(Vec<u128>),
}

impl EncodedWords {
    pub fn width_bits(&self) -> u32 {
        match self {
            Self::U64(_) => 64,
            Self::U128(_) => 128,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::U64(w) => w.len(),
            Self::U128(w) => w.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the words in little-endian order for a byte-oriented packer.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            Self::U64(w) => {
                let le: Vec<u64> = w.iter().map(|x| x.to_le()).collect();
                typed_slice_to_bytes(&le)
            }
            Self::U128(w) => {
                let le: Vec<u128> = w.iter().map(|x| x.to_le()).collect();
                typed_slice_to_bytes(&le)
            }
        }
    }

    /// Reads back words written by `to_le_bytes`.
    ///
    /// # Errors
    /// `UnsupportedType` for a width other than 64 or 128, `BufferMismatch` if
    /// the byte count is not a whole number of words.
    pub fn from_le_bytes(width_bits: u32, bytes: &[u8]) -> Result<Self, TypeCodecError> {
        match width_bits {
            64 => Ok(Self::U64(
                bytes_to_typed_vec::<u64>(bytes)?
                    .into_iter()
                    .map(u64::from_le)
                    .collect(),
            )),
            128 => Ok(Self::U128(
                bytes_to_typed_vec::<u128>(bytes)?
                    .into_iter()
                    .map(u128::from_le)
                    .collect(),
            )),
            other => Err(TypeCodecError::UnsupportedType(format!(
                "{}-bit words",
                other
            ))),
        }
    }
}

/// An encoded column together with the side channel needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub value_type: ValueType,
    pub words: EncodedWords,
    /// Set for `Double` columns only.
    pub scale_index: Option<ScaleIndex>,
    /// Set for non-empty `ObjectId` columns only.
    pub instance_unique: Option<InstanceUnique>,
}
