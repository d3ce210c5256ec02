// In: src/bridge/stateless_api.rs

use crate::bridge::format::{EncodedColumn, EncodedWords, TypedColumn};
use crate::config::{DoubleEncoding, TypeCodecConfig};
use crate::error::TypeCodecError;
use crate::kernels::{decimal, object_id, zigzag};
use crate::types::{ScaleIndex, ValueType};

/// Encodes a column into unsigned words plus its decoding side channel.
pub fn encode_column(
    column: &TypedColumn,
    config: &TypeCodecConfig,
) -> Result<EncodedColumn, TypeCodecError> {
    let value_type = column.value_type();
    let mut scale_index = None;
    let mut instance_unique = None;

    let words = match column {
        TypedColumn::Int64(values) => {
            let mut out = Vec::new();
            zigzag::encode(values, &mut out);
            EncodedWords::U64(out)
        }
        TypedColumn::Int128(values) => {
            let mut out = Vec::new();
            zigzag::encode(values, &mut out);
            EncodedWords::U128(out)
        }
        TypedColumn::Double(values) => {
            let mut signed = Vec::new();
            let scale = match config.double_encoding {
                DoubleEncoding::DecimalScaled => decimal::encode_block(values, &mut signed)?,
                DoubleEncoding::RawMemory => {
                    decimal::encode_block_at(values, ScaleIndex::MEMORY_AS_INTEGER, &mut signed)?;
                    ScaleIndex::MEMORY_AS_INTEGER
                }
            };
            scale_index = Some(scale);
            log_metric!("event" = "encode_column", "type" = value_type, "scale" = scale, "rows" = values.len());
            let mut out = Vec::new();
            zigzag::encode(&signed, &mut out);
            EncodedWords::U64(out)
        }
        TypedColumn::ObjectId(values) => {
            let mut signed = Vec::new();
            instance_unique = object_id::encode_batch(values, &mut signed)?;
            let mut out = Vec::new();
            zigzag::encode(&signed, &mut out);
            EncodedWords::U64(out)
        }
    };

    log::debug!(
        "encoded {} column: {} rows into {}-bit words",
        value_type,
        column.len(),
        words.width_bits()
    );

    Ok(EncodedColumn {
        value_type,
        words,
        scale_index,
        instance_unique,
    })
}

/// Decodes a column produced by `encode_column`.
///
/// # Errors
/// Fails if the word width does not match the value type, or if the side
/// channel the type needs is absent.
pub fn decode_column(encoded: &EncodedColumn) -> Result<TypedColumn, TypeCodecError> {
    match (encoded.value_type, &encoded.words) {
        (ValueType::Int64, EncodedWords::U64(words)) => {
            let mut out = Vec::new();
            zigzag::decode(words, &mut out);
            Ok(TypedColumn::Int64(out))
        }
        (ValueType::Int128, EncodedWords::U128(words)) => {
            let mut out = Vec::new();
            zigzag::decode(words, &mut out);
            Ok(TypedColumn::Int128(out))
        }
        (ValueType::Double, EncodedWords::U64(words)) => {
            let scale = encoded
                .scale_index
                .ok_or(TypeCodecError::MissingSideChannel("scale index"))?;
            let mut signed = Vec::new();
            zigzag::decode(words, &mut signed);
            let mut out = Vec::new();
            decimal::decode_block(&signed, scale, &mut out);
            Ok(TypedColumn::Double(out))
        }
        (ValueType::ObjectId, EncodedWords::U64(words)) => {
            if words.is_empty() {
                return Ok(TypedColumn::ObjectId(Vec::new()));
            }
            let instance_unique = encoded
                .instance_unique
                .ok_or(TypeCodecError::MissingSideChannel("instance-unique field"))?;
            let mut signed = Vec::new();
            zigzag::decode(words, &mut signed);
            let mut out = Vec::new();
            object_id::decode_batch(&signed, &instance_unique, &mut out);
            Ok(TypedColumn::ObjectId(out))
        }
        (value_type, words) => Err(TypeCodecError::UnsupportedType(format!(
            "{} column cannot be decoded from {}-bit words",
            value_type,
            words.width_bits()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int64_column_words_are_zigzagged() {
        let column = TypedColumn::Int64(vec![0, -1, 1, -2]);
        let encoded = encode_column(&column, &TypeCodecConfig::default()).unwrap();
        assert_eq!(encoded.words, EncodedWords::U64(vec![0, 1, 2, 3]));
        assert_eq!(encoded.scale_index, None);
        assert_eq!(encoded.instance_unique, None);
    }

    #[test]
    fn test_double_column_records_scale() {
        let column = TypedColumn::Double(vec![1.12, -0.5]);
        let encoded = encode_column(&column, &TypeCodecConfig::default()).unwrap();
        assert_eq!(encoded.scale_index, ScaleIndex::new(2));
        // 112 -> 224, -50 -> 99
        assert_eq!(encoded.words, EncodedWords::U64(vec![224, 99]));
    }
}
