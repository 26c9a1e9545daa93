//! Startup Self-Test
//!
//! Runs once per process on first use of the hasher. Verifies the compiled-in
//! sizes and tables against RFC 7693 and checks one known answer end to end.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::kernels::constants::{
    BLOCK_BYTES, BLOCK_WORDS, BYTES, BYTES_MAX, BYTES_MIN, IV, SIGMA, STATE_BYTES,
};
use crate::streaming::Blake2bHasher;
use crate::types::{Error, SelfTestFailure};

const NOT_RUN: u8 = 0;
const DONE: u8 = 1;

static STATE: AtomicU8 = AtomicU8::new(NOT_RUN);

/// RFC 7693 Appendix D (shared with SHA-512).
const RFC_IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

/// BLAKE2b-512("abc"), RFC 7693 Appendix A.
#[rustfmt::skip]
const ABC_512: [u8; 64] = [
    0xBA, 0x80, 0xA5, 0x3F, 0x98, 0x1C, 0x4D, 0x0D, 0x6A, 0x27, 0x97, 0xB6, 0x9F, 0x12, 0xF6, 0xE9,
    0x4C, 0x21, 0x2F, 0x14, 0x68, 0x5A, 0xC4, 0xB7, 0x4B, 0x12, 0xBB, 0x6F, 0xDB, 0xFF, 0xA2, 0xD1,
    0x7D, 0x87, 0xC5, 0x39, 0x2A, 0xAB, 0x79, 0x2D, 0xC2, 0x52, 0xD5, 0xDE, 0x45, 0x33, 0xCC, 0x95,
    0x18, 0xD3, 0x8A, 0xA8, 0xDB, 0xF1, 0x92, 0x5A, 0xB9, 0x23, 0x86, 0xED, 0xD4, 0x00, 0x99, 0x23,
];

// =============================================================================
// GUARD
// =============================================================================

/// Run the self-test if it has not passed yet in this process.
///
/// Concurrent first calls may each run the test; it is pure, so they agree.
/// `DONE` is only published after a pass, so a failing build fails for every
/// caller rather than just the first.
///
/// # Errors
/// `Error::InitializationFailed` naming the mismatching constant. This is not
/// a transient fault and must not be retried.
pub fn ensure_initialized() -> Result<(), Error> {
    guard(&STATE, run)
}

/// Run `check` unless `state` already records a pass.
fn guard(state: &AtomicU8, check: fn() -> Result<(), SelfTestFailure>) -> Result<(), Error> {
    if state.load(Ordering::Acquire) == DONE {
        return Ok(());
    }

    log::debug!("running BLAKE2b self-test");
    if let Err(what) = check() {
        log::error!("BLAKE2b self-test failed: {what} mismatch");
        return Err(Error::InitializationFailed(what));
    }

    state.store(DONE, Ordering::Release);
    log::debug!("BLAKE2b self-test passed");
    Ok(())
}

/// Whether the self-test has already passed in this process.
pub fn is_initialized() -> bool {
    STATE.load(Ordering::Acquire) == DONE
}

// =============================================================================
// CHECKS
// =============================================================================

/// All checks, in order. Pure: touches no global state.
pub fn run() -> Result<(), SelfTestFailure> {
    check_sizes()?;
    check_iv(&IV)?;
    check_schedule(&SIGMA)?;
    check_known_answer()
}

const fn check_sizes() -> Result<(), SelfTestFailure> {
    if BYTES_MIN != 1 {
        return Err(SelfTestFailure::MinDigestSize);
    }
    if BYTES_MAX != 64 {
        return Err(SelfTestFailure::MaxDigestSize);
    }
    if BYTES != 32 {
        return Err(SelfTestFailure::DefaultDigestSize);
    }
    if BLOCK_BYTES != 128 {
        return Err(SelfTestFailure::BlockSize);
    }
    if STATE_BYTES != BYTES_MAX {
        return Err(SelfTestFailure::StateSize);
    }
    Ok(())
}

fn check_iv(iv: &[u64; 8]) -> Result<(), SelfTestFailure> {
    if *iv == RFC_IV {
        Ok(())
    } else {
        Err(SelfTestFailure::InitializationVector)
    }
}

fn check_schedule(sigma: &[[usize; BLOCK_WORDS]; 10]) -> Result<(), SelfTestFailure> {
    for (r, row) in sigma.iter().enumerate() {
        let mut seen = 0u32;
        for &idx in row {
            if idx >= BLOCK_WORDS {
                return Err(SelfTestFailure::MessageSchedule);
            }
            seen |= 1 << idx;
        }
        if seen != 0xFFFF {
            return Err(SelfTestFailure::MessageSchedule);
        }
        if r == 0 && row.iter().enumerate().any(|(i, &idx)| i != idx) {
            return Err(SelfTestFailure::MessageSchedule);
        }
    }
    Ok(())
}

fn check_known_answer() -> Result<(), SelfTestFailure> {
    // Bypasses the guard: this *is* the guard.
    let mut hasher = Blake2bHasher::with_valid_size(BYTES_MAX);
    hasher.update(b"abc");
    if hasher.finalize().as_bytes() == &ABC_512[..] {
        Ok(())
    } else {
        Err(SelfTestFailure::KnownAnswer)
    }
}
