//! Public API Layer
//!
//! One-shot hashing and verification. Every entry point runs one full
//! Init/Update/Final cycle of [`Blake2bHasher`], so the one-shot and
//! streaming paths share padding and finalization and cannot diverge.

use crate::ct::constant_time_eq;
use crate::engine::{params, selftest};
use crate::kernels::constants::{BYTES, BYTES_MAX, BYTES_MIN};
use crate::streaming::Blake2bHasher;
use crate::types::{Error, Output};

// =============================================================================
// HASHING
// =============================================================================

/// Compute the BLAKE2b digest of `input`, `digest_size` bytes long (1 to 64).
///
/// # Errors
/// - `Error::ParameterOutOfRange` if `digest_size` is 0 or above 64.
/// - `Error::InitializationFailed` if the startup self-test fails.
///
/// # Example
/// ```rust
/// let digest = blake2b::hash(b"abc", 64)?;
/// assert_eq!(digest.len(), 64);
/// assert_eq!(&digest[..4], &[0xba, 0x80, 0xa5, 0x3f]);
/// # Ok::<(), blake2b::Error>(())
/// ```
pub fn hash(input: &[u8], digest_size: usize) -> Result<Output, Error> {
    let mut hasher = Blake2bHasher::new(digest_size)?;
    hasher.update(input);
    Ok(hasher.finalize())
}

/// Hash `input` into `out`; the digest size is `out.len()`.
///
/// # Errors
/// - `Error::ParameterOutOfRange` if `out` is empty or longer than 64 bytes.
/// - `Error::InitializationFailed` if the startup self-test fails.
pub fn hash_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut hasher = Blake2bHasher::new(out.len())?;
    hasher.update(input);
    hasher.finalize_into(out)
}

/// BLAKE2b-256 of `input`.
///
/// # Panics
/// If the startup self-test fails.
#[must_use]
pub fn hash_default(input: &[u8]) -> Output {
    hash(input, BYTES).unwrap_or_else(|e| panic!("{e}"))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify `tag` against the digest of `input`, in constant time.
///
/// The digest is recomputed at `tag.len()` bytes. A tag of length 0 or above
/// 64 is simply `false`: malformed and wrong tags get the same answer along
/// the same path, since a digest is computed either way and the length check
/// only masks the final comparison.
///
/// # Panics
/// If the startup self-test fails.
///
/// # Example
/// ```rust
/// let tag = blake2b::hash(b"Secure Data", 32)?;
/// assert!(blake2b::verify(b"Secure Data", &tag));
/// assert!(!blake2b::verify(b"Secure Data", &tag[..31]));
/// assert!(!blake2b::verify(b"Secure Data", &[]));
/// # Ok::<(), blake2b::Error>(())
/// ```
#[must_use]
pub fn verify(input: &[u8], tag: &[u8]) -> bool {
    selftest::ensure_initialized().unwrap_or_else(|e| panic!("{e}"));

    let size_ok = params::validate_digest_size(tag.len()).is_ok();
    let digest_size = tag.len().clamp(BYTES_MIN, BYTES_MAX);

    let mut hasher = Blake2bHasher::with_valid_size(digest_size);
    hasher.update(input);
    let digest = hasher.finalize();

    let n = digest_size.min(tag.len());
    size_ok & constant_time_eq(&digest.as_bytes()[..n], &tag[..n])
}

// =============================================================================
// TESTS
// =============================================================================
