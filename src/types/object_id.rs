//! The 12-byte ObjectId and its field layout.
//!
//! ```text
//!   0       4                   9          12
//!   +-------+-------------------+-----------+
//!   | time  |  instance-unique  |  counter  |
//!   +-------+-------------------+-----------+
//! ```
//!
//! Parsing raw bytes or hex text is where malformed lengths are rejected; the
//! split codec itself only ever sees well-formed values.

use crate::error::TypeCodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const OBJECT_ID_SIZE: usize = 12;
pub const TIMESTAMP_SIZE: usize = 4;
pub const INSTANCE_UNIQUE_SIZE: usize = 5;
pub const COUNTER_SIZE: usize = 3;

const INSTANCE_UNIQUE_OFFSET: usize = TIMESTAMP_SIZE;
const COUNTER_OFFSET: usize = TIMESTAMP_SIZE + INSTANCE_UNIQUE_SIZE;

/// The per-producer field of an ObjectId, carried out of band by the encoder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InstanceUnique([u8; INSTANCE_UNIQUE_SIZE]);

impl InstanceUnique {
    pub fn new(bytes: [u8; INSTANCE_UNIQUE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; INSTANCE_UNIQUE_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for InstanceUnique {
    type Error = TypeCodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; INSTANCE_UNIQUE_SIZE] = bytes
            .try_into()
            .map_err(|_| TypeCodecError::InstanceUniqueLength(bytes.len()))?;
        Ok(Self(array))
    }
}

impl fmt::Display for InstanceUnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// A 12-byte unique identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; OBJECT_ID_SIZE]);

impl ObjectId {
    pub fn new(bytes: [u8; OBJECT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Assembles an ObjectId from its three fields.
    pub fn from_parts(
        timestamp: [u8; TIMESTAMP_SIZE],
        instance_unique: &InstanceUnique,
        counter: [u8; COUNTER_SIZE],
    ) -> Self {
        let mut bytes = [0u8; OBJECT_ID_SIZE];
        bytes[..INSTANCE_UNIQUE_OFFSET].copy_from_slice(&timestamp);
        bytes[INSTANCE_UNIQUE_OFFSET..COUNTER_OFFSET].copy_from_slice(instance_unique.as_bytes());
        bytes[COUNTER_OFFSET..].copy_from_slice(&counter);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_SIZE] {
        &self.0
    }

    pub fn timestamp_bytes(&self) -> [u8; TIMESTAMP_SIZE] {
        let mut out = [0u8; TIMESTAMP_SIZE];
        out.copy_from_slice(&self.0[..INSTANCE_UNIQUE_OFFSET]);
        out
    }

    pub fn instance_unique(&self) -> InstanceUnique {
        let mut out = [0u8; INSTANCE_UNIQUE_SIZE];
        out.copy_from_slice(&self.0[INSTANCE_UNIQUE_OFFSET..COUNTER_OFFSET]);
        InstanceUnique(out)
    }

    pub fn counter_bytes(&self) -> [u8; COUNTER_SIZE] {
        let mut out = [0u8; COUNTER_SIZE];
        out.copy_from_slice(&self.0[COUNTER_OFFSET..]);
        out
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = TypeCodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; OBJECT_ID_SIZE] = bytes.try_into().map_err(|_| {
            TypeCodecError::InvalidObjectId(format!(
                "expected {} bytes, got {}",
                OBJECT_ID_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }
}

/// Parses the usual 24-character hex form, in either case.
impl FromStr for ObjectId {
    type Err = TypeCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != OBJECT_ID_SIZE * 2 {
            return Err(TypeCodecError::InvalidObjectId(format!(
                "expected {} hex characters, got {}",
                OBJECT_ID_SIZE * 2,
                s.len()
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypeCodecError::InvalidObjectId(format!(
                "'{}' is not a hex string",
                s
            )));
        }
        let mut bytes = [0u8; OBJECT_ID_SIZE];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]);
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

// Caller has already checked `c` is an ASCII hex digit.
fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}
