//! The fixed decimal multiplier table and the index type that points into it.
//!
//! The table holds ascending powers of ten. One extra index past the end of the
//! table, `MEMORY_AS_INTEGER`, is not a multiplier: it tells the double codec
//! to store the value's IEEE-754 bit pattern instead of a scaled integer.

use crate::error::TypeCodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal multipliers, in ascending order. Every entry is exactly representable
/// as an `f64`.
pub const SCALE_MULTIPLIERS: [f64; 5] = [1.0, 10.0, 100.0, 10_000.0, 100_000_000.0];

/// Index value reserved for "reinterpret the double's memory as an integer".
pub const MEMORY_AS_INTEGER: u8 = SCALE_MULTIPLIERS.len() as u8;

/// An index into `SCALE_MULTIPLIERS`, or the raw-memory sentinel.
///
/// Ordering follows the multiplier: a larger index always means a finer scale,
/// and the sentinel sorts after every multiplier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScaleIndex(u8);

impl ScaleIndex {
    /// The raw-memory sentinel.
    pub const MEMORY_AS_INTEGER: ScaleIndex = ScaleIndex(MEMORY_AS_INTEGER);

    /// The coarsest scale, multiplier `1`.
    pub const UNSCALED: ScaleIndex = ScaleIndex(0);

    /// Returns `None` if `index` is neither a table index nor the sentinel.
    pub fn new(index: u8) -> Option<Self> {
        (index <= MEMORY_AS_INTEGER).then_some(Self(index))
    }

    /// Finds the index whose multiplier equals `multiplier` exactly.
    pub fn for_multiplier(multiplier: f64) -> Option<Self> {
        SCALE_MULTIPLIERS
            .iter()
            .position(|&m| m == multiplier)
            .map(|i| Self(i as u8))
    }

    /// The multiplier for this index, or `None` for the raw-memory sentinel.
    pub fn multiplier(self) -> Option<f64> {
        SCALE_MULTIPLIERS.get(self.0 as usize).copied()
    }

    pub fn is_memory_as_integer(self) -> bool {
        self.0 == MEMORY_AS_INTEGER
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Every multiplier index, coarsest first. The sentinel is not included.
    pub fn scaled() -> impl Iterator<Item = ScaleIndex> {
        (0..MEMORY_AS_INTEGER).map(ScaleIndex)
    }
}

impl TryFrom<u8> for ScaleIndex {
    type Error = TypeCodecError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(TypeCodecError::InvalidScaleIndex(index))
    }
}

impl From<ScaleIndex> for u8 {
    fn from(index: ScaleIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for ScaleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.multiplier() {
            Some(m) => write!(f, "x{}", m),
            None => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ascending_powers_of_ten() {
        for pair in SCALE_MULTIPLIERS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for m in SCALE_MULTIPLIERS {
            let exponent = m.log10().round() as i32;
            assert_eq!(10f64.powi(exponent), m);
            assert!((0..=8).contains(&exponent));
        }
    }

    #[test]
    fn test_sentinel_is_distinct_from_multipliers() {
        let sentinel = ScaleIndex::MEMORY_AS_INTEGER;
        assert!(sentinel.is_memory_as_integer());
        assert_eq!(sentinel.multiplier(), None);
        assert!(ScaleIndex::scaled().all(|s| s < sentinel && s.multiplier().is_some()));
        assert_eq!(ScaleIndex::scaled().count(), SCALE_MULTIPLIERS.len());
    }

    #[test]
    fn test_lookup_by_multiplier() {
        assert_eq!(ScaleIndex::for_multiplier(1.0), Some(ScaleIndex::UNSCALED));
        assert_eq!(ScaleIndex::for_multiplier(10_000.0).map(|s| s.as_u8()), Some(3));
        assert_eq!(ScaleIndex::for_multiplier(1000.0), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(ScaleIndex::try_from(MEMORY_AS_INTEGER).is_ok());
        let result = ScaleIndex::try_from(MEMORY_AS_INTEGER + 1);
        assert!(matches!(result, Err(TypeCodecError::InvalidScaleIndex(6))));
    }

    #[test]
    fn test_serde_as_u8() {
        let json = serde_json::to_string(&ScaleIndex::MEMORY_AS_INTEGER).unwrap();
        assert_eq!(json, "5");
        assert!(serde_json::from_str::<ScaleIndex>("9").is_err());
    }
}
