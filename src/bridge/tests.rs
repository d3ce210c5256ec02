// In: src/bridge/tests.rs

use super::*;
use crate::config::{DoubleEncoding, TypeCodecConfig};
use crate::error::TypeCodecError;
use crate::types::{InstanceUnique, ObjectId, ScaleIndex, ValueType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//==================================================================================
// Test Helpers
//==================================================================================

fn roundtrip(column: &TypedColumn, config: &TypeCodecConfig) -> (EncodedColumn, TypedColumn) {
    let encoded = encode_column(column, config).unwrap();
    assert_eq!(encoded.value_type, column.value_type());
    assert_eq!(encoded.words.len(), column.len());
    let decoded = decode_column(&encoded).unwrap();
    (encoded, decoded)
}

fn double_bits(column: &TypedColumn) -> Vec<u64> {
    match column {
        TypedColumn::Double(v) => v.iter().map(|x| x.to_bits()).collect(),
        other => panic!("expected a Double column, got {:?}", other.value_type()),
    }
}

//==================================================================================
// Round Trips Per Value Type
//==================================================================================

#[test]
fn test_int64_column_roundtrip() {
    let column = TypedColumn::Int64(vec![i64::MIN, -1234, -1, 0, 1, 1234, i64::MAX]);
    let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
    assert_eq!(encoded.words.width_bits(), 64);
    assert_eq!(decoded, column);
}

#[test]
fn test_int128_column_roundtrip() {
    let mut rng = StdRng::seed_from_u64(128);
    let mut values: Vec<i128> = (0..256).map(|_| rng.random()).collect();
    values.extend_from_slice(&[i128::MIN, i128::MAX, 0, -1]);
    let column = TypedColumn::Int128(values);

    let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
    assert_eq!(encoded.words.width_bits(), 128);
    assert_eq!(decoded, column);
}

#[test]
fn test_decimal_double_column_roundtrip() {
    let column = TypedColumn::Double(vec![21.5, 21.75, -3.0, 0.0, 123.123]);
    let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
    assert_eq!(encoded.scale_index, ScaleIndex::for_multiplier(10_000.0));
    assert_eq!(double_bits(&decoded), double_bits(&column));
}

#[test]
fn test_special_double_column_falls_back_to_raw_memory() {
    let column = TypedColumn::Double(vec![
        1.0,
        -0.0,
        f64::NAN,
        f64::from_bits(0x7FF4_0000_0000_0001),
        f64::INFINITY,
        5e-324,
    ]);
    let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
    assert_eq!(encoded.scale_index, Some(ScaleIndex::MEMORY_AS_INTEGER));
    assert_eq!(double_bits(&decoded), double_bits(&column));
}

#[test]
fn test_raw_memory_config_skips_scaling() {
    let config = TypeCodecConfig {
        double_encoding: DoubleEncoding::RawMemory,
    };
    let column = TypedColumn::Double(vec![1.0, 2.5]);
    let (encoded, decoded) = roundtrip(&column, &config);
    assert_eq!(encoded.scale_index, Some(ScaleIndex::MEMORY_AS_INTEGER));
    assert_eq!(decoded, column);
}

#[test]
fn test_random_double_column_roundtrip() {
    let mut rng = StdRng::seed_from_u64(2021);
    for _ in 0..64 {
        let values: Vec<f64> = (0..32)
            .map(|_| {
                if rng.random_bool(0.1) {
                    f64::from_bits(rng.random())
                } else {
                    rng.random_range(-100_000i64..100_000) as f64 / 100.0
                }
            })
            .collect();
        let column = TypedColumn::Double(values);
        let (_, decoded) = roundtrip(&column, &TypeCodecConfig::default());
        assert_eq!(double_bits(&decoded), double_bits(&column));
    }
}

#[test]
fn test_object_id_column_roundtrip() {
    let iu = InstanceUnique::new([0x55, 0x66, 0x77, 0x88, 0x99]);
    let ids: Vec<ObjectId> = (0u8..32)
        .map(|i| ObjectId::from_parts([0x11, 0x22, 0x33, 0x44 + i], &iu, [0xAA, 0xBB, i]))
        .collect();
    let column = TypedColumn::ObjectId(ids);

    let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
    assert_eq!(encoded.instance_unique, Some(iu));
    assert_eq!(decoded, column);
}

//==================================================================================
// Edge Cases and Errors
//==================================================================================

#[test]
fn test_empty_columns_roundtrip() {
    for column in [
        TypedColumn::Int64(vec![]),
        TypedColumn::Int128(vec![]),
        TypedColumn::Double(vec![]),
        TypedColumn::ObjectId(vec![]),
    ] {
        let (encoded, decoded) = roundtrip(&column, &TypeCodecConfig::default());
        assert!(encoded.words.is_empty());
        assert_eq!(decoded, column);
    }
}

#[test]
fn test_mixed_producers_are_rejected() {
    let column = TypedColumn::ObjectId(vec![
        "65f0a1b2aaaaaaaaaa000001".parse().unwrap(),
        "65f0a1b2bbbbbbbbbb000002".parse().unwrap(),
    ]);
    let result = encode_column(&column, &TypeCodecConfig::default());
    assert!(matches!(
        result,
        Err(TypeCodecError::MixedInstanceUnique { .. })
    ));
}

#[test]
fn test_missing_scale_index_is_an_error() {
    let mut encoded =
        encode_column(&TypedColumn::Double(vec![1.5]), &TypeCodecConfig::default()).unwrap();
    encoded.scale_index = None;
    assert!(matches!(
        decode_column(&encoded),
        Err(TypeCodecError::MissingSideChannel("scale index"))
    ));
}

#[test]
fn test_missing_instance_unique_is_an_error() {
    let column = TypedColumn::ObjectId(vec!["112233445566778899AABBCC".parse().unwrap()]);
    let mut encoded = encode_column(&column, &TypeCodecConfig::default()).unwrap();
    encoded.instance_unique = None;
    assert!(matches!(
        decode_column(&encoded),
        Err(TypeCodecError::MissingSideChannel(_))
    ));
}

#[test]
fn test_word_width_mismatch_is_an_error() {
    let encoded = EncodedColumn {
        value_type: ValueType::Int128,
        words: EncodedWords::U64(vec![1, 2]),
        scale_index: None,
        instance_unique: None,
    };
    assert!(matches!(
        decode_column(&encoded),
        Err(TypeCodecError::UnsupportedType(_))
    ));
}

//==================================================================================
// Byte Hand-off
//==================================================================================

#[test]
fn test_words_survive_byte_handoff() {
    let column = TypedColumn::Int128(vec![i128::MIN, -7, 7, i128::MAX]);
    let encoded = encode_column(&column, &TypeCodecConfig::default()).unwrap();

    let bytes = encoded.words.to_le_bytes();
    assert_eq!(bytes.len(), 4 * 16);
    // -7 zig-zags to 13, stored little-endian.
    assert_eq!(bytes[16], 13);

    let words = EncodedWords::from_le_bytes(128, &bytes).unwrap();
    assert_eq!(words, encoded.words);

    let rebuilt = EncodedColumn { words, ..encoded };
    assert_eq!(decode_column(&rebuilt).unwrap(), column);
}

#[test]
fn test_byte_handoff_rejects_bad_input() {
    assert!(matches!(
        EncodedWords::from_le_bytes(64, &[0u8; 9]),
        Err(TypeCodecError::BufferMismatch(8, 9))
    ));
    assert!(matches!(
        EncodedWords::from_le_bytes(32, &[0u8; 8]),
        Err(TypeCodecError::UnsupportedType(_))
    ));
}
