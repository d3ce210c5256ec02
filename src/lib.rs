//! This file is the root of the `simple8b_types` Rust crate.
//!
//! The crate converts typed values (signed 64/128-bit integers, doubles and
//! ObjectIds) into unsigned integers that a simple-8b block encoder can pack,
//! and converts them back bit-for-bit. Its responsibilities are limited to:
//! 1.  Declaring the top-level modules (`kernels`, `types`, `bridge`, ...).
//! 2.  Re-exporting the public surface so callers do not need to know the
//!     internal module layout.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod traits;
pub mod types;

mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{decode_column, encode_column, EncodedColumn, EncodedWords, TypedColumn};
pub use config::{DoubleEncoding, TypeCodecConfig};
pub use error::TypeCodecError;
pub use kernels::decimal::{calculate_decimal_shift_multiplier, decode_double, encode_double};
pub use kernels::object_id::{decode_object_id, encode_object_id};
pub use kernels::zigzag::{decode_int128, decode_int64, encode_int128, encode_int64};
pub use observability::init_logging;
pub use types::{InstanceUnique, ObjectId, ScaleIndex, ValueType};
