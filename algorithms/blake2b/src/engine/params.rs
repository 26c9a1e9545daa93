//! Parameter Validation
//!
//! Digest size checks and the RFC 7693 parameter block.

use crate::kernels::constants::{
    BYTES_MAX, BYTES_MIN, BYTES_RECOMMENDED_MIN, DEPTH, FANOUT, IV, STATE_WORDS,
};
use crate::types::Error;

/// Accept a digest size in `BYTES_MIN..=BYTES_MAX`.
///
/// # Errors
/// `Error::ParameterOutOfRange` carrying the rejected value and the bounds.
pub const fn validate_digest_size(size: usize) -> Result<usize, Error> {
    if size < BYTES_MIN || size > BYTES_MAX {
        return Err(Error::ParameterOutOfRange {
            value: size,
            min: BYTES_MIN,
            max: BYTES_MAX,
        });
    }
    Ok(size)
}

/// Whether `size` meets the 128-bit security target. Smaller sizes are still
/// valid, they are just an explicit choice of a weaker digest.
#[must_use]
pub const fn is_recommended_size(size: usize) -> bool {
    size >= BYTES_RECOMMENDED_MIN && size <= BYTES_MAX
}

/// Parameter block for an unkeyed sequential hash, as little-endian words.
///
/// Byte 0 is the digest length, byte 1 the key length (0), byte 2 the fanout
/// and byte 3 the depth. Leaf length, node offset, node depth, inner length,
/// salt and personalization are all zero.
#[allow(clippy::cast_possible_truncation)]
pub const fn parameter_block(digest_size: usize) -> [u64; STATE_WORDS] {
    let mut p = [0u64; STATE_WORDS];
    p[0] = u64::from_le_bytes([digest_size as u8, 0, FANOUT, DEPTH, 0, 0, 0, 0]);
    p
}

/// Initial chaining value `IV ^ P` for a validated digest size.
pub const fn initial_chaining_value(digest_size: usize) -> [u64; STATE_WORDS] {
    let p = parameter_block(digest_size);
    let mut h = IV;
    let mut i = 0;
    while i < STATE_WORDS {
        h[i] ^= p[i];
        i += 1;
    }
    h
}
