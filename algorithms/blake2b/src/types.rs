//! Shared types used across the library.

use core::fmt;
use core::ops::Deref;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::BYTES_MAX;

// =============================================================================
// OUTPUT
// =============================================================================

/// A finished digest of 1 to 64 bytes.
///
/// Equality is constant-time, so an `Output` can be compared against an
/// untrusted tag directly.
#[derive(Clone, Copy)]
pub struct Output {
    bytes: [u8; BYTES_MAX],
    len: u8,
}

impl Output {
    /// Build from a full 64-byte serialization of the chaining value,
    /// truncated to `len` bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn truncated(mut bytes: [u8; BYTES_MAX], len: usize) -> Self {
        debug_assert!(len <= BYTES_MAX);
        bytes[len..].fill(0);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: digests are at least one byte long.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex encoding, written without allocating.
    #[must_use]
    pub fn to_hex(&self) -> HexOutput {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut buf = [0u8; 2 * BYTES_MAX];
        for (pair, byte) in buf.chunks_exact_mut(2).zip(self.as_bytes()) {
            pair[0] = DIGITS[usize::from(byte >> 4)];
            pair[1] = DIGITS[usize::from(byte & 0x0F)];
        }
        HexOutput {
            buf,
            len: 2 * self.len(),
        }
    }
}

impl Deref for Output {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Output {
    fn eq(&self, other: &Self) -> bool {
        crate::ct::constant_time_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for Output {}

impl PartialEq<[u8]> for Output {
    fn eq(&self, other: &[u8]) -> bool {
        crate::ct::constant_time_eq(self.as_bytes(), other)
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output({})", self.to_hex())
    }
}

/// Hex rendering of an [`Output`], returned by [`Output::to_hex`].
#[derive(Clone, Copy)]
pub struct HexOutput {
    buf: [u8; 2 * BYTES_MAX],
    len: usize,
}

impl HexOutput {
    /// The hex digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits are ever written.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Constant or table that failed the startup self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfTestFailure {
    /// `BYTES_MIN` is not 1.
    MinDigestSize,
    /// `BYTES_MAX` is not 64.
    MaxDigestSize,
    /// `BYTES` (the default digest size) is not 32.
    DefaultDigestSize,
    /// Block size is not 128 bytes.
    BlockSize,
    /// Chaining state does not span `BYTES_MAX` bytes.
    StateSize,
    /// IV differs from RFC 7693.
    InitializationVector,
    /// A message schedule row is not a permutation of 0..16.
    MessageSchedule,
    /// The known-answer digest did not match.
    KnownAnswer,
}

impl SelfTestFailure {
    /// Name of the constant or check that failed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinDigestSize => "minimum digest size",
            Self::MaxDigestSize => "maximum digest size",
            Self::DefaultDigestSize => "default digest size",
            Self::BlockSize => "block size",
            Self::StateSize => "internal state size",
            Self::InitializationVector => "initialization vector",
            Self::MessageSchedule => "message schedule",
            Self::KnownAnswer => "known-answer test",
        }
    }
}

impl fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digest size outside `min..=max` was requested.
    ParameterOutOfRange {
        /// The rejected size.
        value: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// An output buffer does not match the state's digest size.
    OutputSizeMismatch {
        /// Digest size of the state.
        expected: usize,
        /// Length of the caller's buffer.
        actual: usize,
    },
    /// The startup self-test failed. Not retryable: the build or environment
    /// is inconsistent and no hashing may proceed.
    InitializationFailed(SelfTestFailure),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterOutOfRange { value, min, max } => write!(
                f,
                "digest size {value} out of range: must be between {min} and {max} bytes"
            ),
            Self::OutputSizeMismatch { expected, actual } => write!(
                f,
                "output buffer is {actual} bytes but the hasher produces {expected}"
            ),
            Self::InitializationFailed(what) => {
                write!(f, "BLAKE2b initialization failed: {what} mismatch")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

// =============================================================================
// TESTS
// =============================================================================
