//! Streaming Hasher
//!
//! Incremental Init/Update/Final over a fixed 128-byte buffer. The last block
//! of the input is always held back until `finalize`, because only then is it
//! known to be last and compressed with the finalization flag set.

use core::fmt;

use crate::ct::constant_time_eq;
use crate::engine::{params, selftest};
use crate::kernels::constants::{BLOCK_BYTES, BYTES, BYTES_MAX, STATE_WORDS};
use crate::kernels::portable::compress;
use crate::types::{Error, Output};

#[cfg(feature = "digest-trait")]
use digest::{HashMarker, InvalidBufferSize, InvalidOutputSize, Reset, Update, VariableOutput};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental BLAKE2b state.
///
/// Owned by one caller at a time. `finalize` consumes the state, so a
/// finalized hasher cannot be updated again; use `clone` or [`verify`] to
/// look at the digest of a prefix while continuing to absorb data.
///
/// [`verify`]: Blake2bHasher::verify
#[derive(Clone)]
pub struct Blake2bHasher {
    /// Chaining value
    h: [u64; STATE_WORDS],
    /// Bytes compressed so far (low, high)
    t: [u64; 2],
    /// Finalization flags (last block, last node)
    f: [u64; 2],
    /// Pending input, `buffer_len <= BLOCK_BYTES`
    buffer: [u8; BLOCK_BYTES],
    buffer_len: usize,
    digest_size: usize,
}

impl Blake2bHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher producing `digest_size` bytes (1 to 64).
    ///
    /// Sizes below 32 are accepted but fall short of 128-bit collision
    /// resistance.
    ///
    /// # Errors
    /// - `Error::ParameterOutOfRange` if `digest_size` is 0 or above 64.
    /// - `Error::InitializationFailed` if the startup self-test fails.
    pub fn new(digest_size: usize) -> Result<Self, Error> {
        selftest::ensure_initialized()?;
        let digest_size = params::validate_digest_size(digest_size)?;
        Ok(Self::with_valid_size(digest_size))
    }

    /// Fresh state for an already validated size. Skips the self-test guard.
    pub(crate) const fn with_valid_size(digest_size: usize) -> Self {
        Self {
            h: params::initial_chaining_value(digest_size),
            t: [0, 0],
            f: [0, 0],
            buffer: [0u8; BLOCK_BYTES],
            buffer_len: 0,
            digest_size,
        }
    }

    /// Digest size fixed at construction.
    #[must_use]
    pub const fn digest_size(&self) -> usize {
        self.digest_size
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb `data`.
    ///
    /// A full block is compressed only once at least one more byte is known
    /// to follow it. Splitting the input across calls never changes the
    /// digest; empty slices are no-ops.
    pub fn update(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }

        // Top up the pending block first.
        if self.buffer_len > 0 {
            let take = (BLOCK_BYTES - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if data.is_empty() {
                return;
            }

            // Buffer is full and more input follows: not the last block.
            self.increment_counter(BLOCK_BYTES);
            compress(&mut self.h, &self.buffer, self.t, self.f);
            self.buffer_len = 0;
        }

        // Zero-copy path: compress whole blocks straight from the input,
        // keeping at least one byte back.
        while data.len() > BLOCK_BYTES {
            let Some((block, rest)) = data.split_first_chunk::<BLOCK_BYTES>() else {
                break;
            };
            self.increment_counter(BLOCK_BYTES);
            compress(&mut self.h, block, self.t, self.f);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// Add `n` bytes to the 128-bit counter.
    fn increment_counter(&mut self, n: usize) {
        let (lo, carry) = self.t[0].overflowing_add(n as u64);
        self.t[0] = lo;
        self.t[1] = self.t[1].wrapping_add(u64::from(carry));
    }

    /// Restore the freshly initialized state, keeping the digest size.
    pub fn reset(&mut self) {
        *self = Self::with_valid_size(self.digest_size);
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Pad, compress the last block and return the digest.
    #[must_use]
    pub fn finalize(self) -> Output {
        let digest_size = self.digest_size;
        Output::truncated(self.finalize_words(), digest_size)
    }

    /// Finalize into `out`, which must be exactly `digest_size()` bytes.
    ///
    /// # Errors
    /// `Error::OutputSizeMismatch` if `out` has any other length. Nothing is
    /// written in that case.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() != self.digest_size {
            return Err(Error::OutputSizeMismatch {
                expected: self.digest_size,
                actual: out.len(),
            });
        }
        let digest_size = self.digest_size;
        let full = self.finalize_words();
        out.copy_from_slice(&full[..digest_size]);
        Ok(())
    }

    /// Check `tag` against the digest of everything absorbed so far, in
    /// constant time.
    ///
    /// Works on a private copy: `self` is left untouched and can keep
    /// absorbing data. A tag whose length is not `digest_size()` never
    /// matches.
    #[must_use]
    pub fn verify(&self, tag: &[u8]) -> bool {
        let computed = self.clone().finalize();
        constant_time_eq(computed.as_bytes(), tag)
    }

    /// Full 64-byte little-endian serialization of the final chaining value.
    fn finalize_words(mut self) -> [u8; BYTES_MAX] {
        // Counter advances by the real byte count, not the padded block.
        self.increment_counter(self.buffer_len);
        self.f[0] = !0;
        self.buffer[self.buffer_len..].fill(0);
        compress(&mut self.h, &self.buffer, self.t, self.f);

        let mut out = [0u8; BYTES_MAX];
        for (chunk, word) in out.chunks_exact_mut(8).zip(&self.h) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Blake2bHasher {
    /// BLAKE2b-256. Panics if the startup self-test fails.
    fn default() -> Self {
        Self::new(BYTES).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl fmt::Debug for Blake2bHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2bHasher")
            .field("digest_size", &self.digest_size)
            .field("buffered", &self.buffer_len)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "digest-trait")]
impl Update for Blake2bHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl VariableOutput for Blake2bHasher {
    const MAX_OUTPUT_SIZE: usize = BYTES_MAX;

    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        Self::new(output_size).map_err(|_| InvalidOutputSize)
    }

    fn output_size(&self) -> usize {
        self.digest_size
    }

    fn finalize_variable(self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        self.finalize_into(out).map_err(|_| InvalidBufferSize)
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Blake2bHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Blake2bHasher {}

// =============================================================================
// TESTS
// =============================================================================
