#![cfg_attr(not(feature = "std"), no_std)]

//! # BLAKE2b
//!
//! Unkeyed BLAKE2b (RFC 7693) with 1 to 64 byte digests.
//! Pure Rust, `no_std`, constant-time verification.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = blake2b::hash(b"Integrity Matters", 32)?;
//! println!("{}", digest.to_hex());
//!
//! // 2. Constant-time verification (digest size taken from the tag)
//! assert!(blake2b::verify(b"Integrity Matters", &digest));
//!
//! // 3. Streaming (large files, sockets)
//! use blake2b::Hasher;
//!
//! let mut hasher = Hasher::new(32)?;
//! hasher.update(b"Integrity ");
//! hasher.update(b"Matters");
//! assert_eq!(hasher.finalize(), digest);
//! # Ok::<(), blake2b::Error>(())
//! ```
//!
//! Digest sizes below 32 bytes are accepted but do not reach a 128-bit
//! collision security level.

// =============================================================================
// MODULES
// =============================================================================

mod ct;
mod engine;
#[cfg(feature = "std")]
mod ffi;
// Kernel internals for tests and benchmarks; not part of the stable API.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use ct::constant_time_eq;
#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::params::is_recommended_size;
pub use engine::selftest::{ensure_initialized, is_initialized};
pub use kernels::constants::{BLOCK_BYTES, BYTES, BYTES_MAX, BYTES_MIN};
pub use oneshot::{hash, hash_default, hash_into, verify};
pub use streaming::Blake2bHasher as Hasher;
pub use types::{Error, HexOutput, Output, SelfTestFailure};
