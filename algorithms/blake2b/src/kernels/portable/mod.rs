//! Portable implementation of the BLAKE2b compression function.
//!
//! Straight-line 64-bit arithmetic only: no table lookups indexed by data and
//! no branches on message or state words, so it runs in data-independent time.

use self::utils::{load_words, WorkVector};
use crate::kernels::constants::{BLOCK_BYTES, IV, ROUNDS, SIGMA, STATE_WORDS};

mod utils;

// =============================================================================
// COMPRESSION
// =============================================================================

/// Compress one 128-byte block into the chaining value `h`.
///
/// `t` is the byte counter *including* this block, `f` the finalization
/// flags (`f[0] = !0` on the last block).
pub fn compress(h: &mut [u64; STATE_WORDS], block: &[u8; BLOCK_BYTES], t: [u64; 2], f: [u64; 2]) {
    let m = load_words(block);

    let mut w = WorkVector::zero();
    w.v[..STATE_WORDS].copy_from_slice(h);
    w.v[STATE_WORDS..].copy_from_slice(&IV);
    w.v[12] ^= t[0];
    w.v[13] ^= t[1];
    w.v[14] ^= f[0];
    w.v[15] ^= f[1];

    for r in 0..ROUNDS {
        let s = &SIGMA[r % SIGMA.len()];

        // Columns
        w.g(0, 4, 8, 12, m[s[0]], m[s[1]]);
        w.g(1, 5, 9, 13, m[s[2]], m[s[3]]);
        w.g(2, 6, 10, 14, m[s[4]], m[s[5]]);
        w.g(3, 7, 11, 15, m[s[6]], m[s[7]]);

        // Diagonals
        w.g(0, 5, 10, 15, m[s[8]], m[s[9]]);
        w.g(1, 6, 11, 12, m[s[10]], m[s[11]]);
        w.g(2, 7, 8, 13, m[s[12]], m[s[13]]);
        w.g(3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for (i, hi) in h.iter_mut().enumerate() {
        *hi ^= w.v[i] ^ w.v[i + STATE_WORDS];
    }
}

// =============================================================================
// TESTS
// =============================================================================
