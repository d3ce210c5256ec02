//! This module contains the ObjectId split codec.
//!
//! Within a batch produced by one process, the 5-byte instance-unique field of
//! every ObjectId is the same, while the timestamp and counter both climb. The
//! codec drops the constant field (the caller stores it once, out of band) and
//! interleaves the bytes of the two climbing fields so consecutive ids stay
//! numerically close:
//!
//! ```text
//!   byte:    7    6    5    4    3    2    1    0
//!          [ 00 | t0 | c0 | t1 | c1 | t2 | c2 | t3 ]
//! ```
//!
//! `t0..t3` are the timestamp bytes and `c0..c2` the counter bytes, in their
//! stored (big-endian) order. The top byte is always zero.

use crate::error::TypeCodecError;
use crate::types::object_id::{COUNTER_SIZE, TIMESTAMP_SIZE};
use crate::types::{InstanceUnique, ObjectId};

/// Encodes the timestamp and counter of `oid` into a single integer.
pub fn encode_object_id(oid: &ObjectId) -> i64 {
    let ts = oid.timestamp_bytes();
    let ctr = oid.counter_bytes();
    i64::from_be_bytes([0, ts[0], ctr[0], ts[1], ctr[1], ts[2], ctr[2], ts[3]])
}

/// Rebuilds an ObjectId from an encoded integer and its instance-unique field.
pub fn decode_object_id(encoded: i64, instance_unique: &InstanceUnique) -> ObjectId {
    let b = encoded.to_be_bytes();
    let timestamp: [u8; TIMESTAMP_SIZE] = [b[1], b[3], b[5], b[7]];
    let counter: [u8; COUNTER_SIZE] = [b[2], b[4], b[6]];
    ObjectId::from_parts(timestamp, instance_unique, counter)
}

/// Encodes a batch of ObjectIds that share one instance-unique field.
///
/// Returns the shared field, or `None` for an empty batch.
///
/// # Errors
/// Returns `TypeCodecError::MixedInstanceUnique` if the batch holds ids from
/// more than one producer; such a batch cannot be rebuilt from one field.
pub fn encode_batch(
    input_slice: &[ObjectId],
    output_buf: &mut Vec<i64>,
) -> Result<Option<InstanceUnique>, TypeCodecError> {
    output_buf.clear();
    let Some(first) = input_slice.first() else {
        return Ok(None);
    };
    let shared = first.instance_unique();
    output_buf.reserve(input_slice.len());
    for oid in input_slice {
        let iu = oid.instance_unique();
        if iu != shared {
            output_buf.clear();
            return Err(TypeCodecError::MixedInstanceUnique {
                first: shared.to_string(),
                other: iu.to_string(),
            });
        }
        output_buf.push(encode_object_id(oid));
    }
    Ok(Some(shared))
}

/// Reverses `encode_batch`.
pub fn decode_batch(
    input_slice: &[i64],
    instance_unique: &InstanceUnique,
    output_buf: &mut Vec<ObjectId>,
) {
    output_buf.clear();
    output_buf.extend(
        input_slice
            .iter()
            .map(|&e| decode_object_id(e, instance_unique)),
    );
}
