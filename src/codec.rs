//! Fixed-width little-endian packing of field elements.
//!
//! Wire blobs hold field elements as unsigned big integers, byte 0 least
//! significant, every element occupying the same number of bytes. The
//! packing is limb-aligned so a serialized vector supports O(1) random
//! access and decodes straight into the big-integer representation used
//! by the field arithmetic.

use crate::errors::{BridgeError, BridgeResult};
use ark_ff::{BigInteger, PrimeField, Zero};

const BYTES_PER_LIMB: usize = 8;

/// The fixed per-element byte width for field `F`.
pub fn element_byte_width<F: PrimeField>() -> usize {
    F::BigInt::NUM_LIMBS * BYTES_PER_LIMB
}

/// Interpret `bytes` as a little-endian unsigned integer and lift it into
/// the field. The element width is `bytes.len()`.
///
/// Panics if the width exceeds the limb capacity of `F`: that is an
/// inconsistent configuration, not a recoverable condition. A value at or
/// above the field modulus is a malformed-input error.
pub fn le_to_field<F: PrimeField>(bytes: &[u8]) -> BridgeResult<F> {
    let mut repr = F::BigInt::default();
    let limbs = repr.as_mut();
    assert!(
        limbs.len() * BYTES_PER_LIMB >= bytes.len(),
        "element width {} exceeds the {}-limb capacity of the field",
        bytes.len(),
        limbs.len(),
    );

    for (pos, byte) in bytes.iter().enumerate() {
        let limb = pos / BYTES_PER_LIMB;
        let limb_byte = pos % BYTES_PER_LIMB;
        limbs[limb] |= u64::from(*byte) << (limb_byte * 8);
    }

    F::from_bigint(repr).ok_or_else(|| BridgeError::non_canonical_element(0))
}

/// Write the canonical big-integer value of `value` as `width`
/// little-endian bytes. Bytes past the limb capacity are zero.
///
/// Panics if `width` cannot hold every limb; truncating an element would
/// silently corrupt it.
pub fn field_to_le<F: PrimeField>(value: &F, width: usize) -> Vec<u8> {
    let repr = value.into_bigint();
    let limbs = repr.as_ref();
    assert!(
        width >= limbs.len() * BYTES_PER_LIMB,
        "destination width {} cannot hold {} limbs",
        width,
        limbs.len(),
    );

    let mut out = vec![0u8; width];
    for (pos, byte) in out.iter_mut().enumerate() {
        let limb = pos / BYTES_PER_LIMB;
        if limb < limbs.len() {
            let limb_byte = pos % BYTES_PER_LIMB;
            *byte = (limbs[limb] >> (limb_byte * 8)) as u8;
        }
    }
    out
}

/// Split a flat blob into `count` equal slices and decode each element.
///
/// The element width is derived as `bytes.len() / count`; an inexact
/// division means the blob violates the one-width-per-vector rule and is
/// rejected outright.
pub fn decode_elements<F: PrimeField>(bytes: &[u8], count: usize) -> BridgeResult<Vec<F>> {
    if count == 0 {
        if !bytes.is_empty() {
            return Err(BridgeError::inexact_element_width(bytes.len(), 0));
        }
        return Ok(Vec::new());
    }
    if bytes.len() % count != 0 {
        return Err(BridgeError::inexact_element_width(bytes.len(), count));
    }
    let width = bytes.len() / count;
    if width == 0 {
        return Ok(vec![F::zero(); count]);
    }

    bytes
        .chunks_exact(width)
        .enumerate()
        .map(|(position, chunk)| {
            le_to_field(chunk).map_err(|_| BridgeError::non_canonical_element(position))
        })
        .collect()
}

/// Concatenate the fixed-width encoding of each element, in order.
pub fn encode_elements<F: PrimeField>(values: &[F]) -> Vec<u8> {
    let width = element_byte_width::<F>();
    let mut out = Vec::with_capacity(width * values.len());
    for value in values {
        out.extend_from_slice(&field_to_le(value, width));
    }
    out
}
