// In: src/config.rs

//! Configuration for the column bridge.
//!
//! `TypeCodecConfig` is created once at the application boundary (usually
//! from JSON) and passed by reference into `encode_column`. Every field has a
//! default, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::TypeCodecError;

/// How the bridge turns doubles into integers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoubleEncoding {
    /// **Default:** pick the coarsest decimal scale shared by the block and
    /// fall back to raw memory only when no scale fits.
    #[default]
    DecimalScaled,

    /// Always store the IEEE-754 bit pattern. Skips the scale search entirely.
    RawMemory,
}

/// The configuration consumed by the column bridge.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TypeCodecConfig {
    #[serde(default)]
    pub double_encoding: DoubleEncoding,
}

impl TypeCodecConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TypeCodecError> {
        Ok(serde_json::from_str(json)?)
    }
}
