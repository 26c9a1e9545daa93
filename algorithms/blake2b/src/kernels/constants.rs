//! BLAKE2b Kernel Constants
//!
//! Values fixed by RFC 7693. The IV is the same as SHA-512's: the first 64
//! bits of the fractional parts of the square roots of the first eight primes.
//!
//! ```text
//! IV[i] = floor(frac(sqrt(p_i)) * 2^64),  p = 2, 3, 5, 7, 11, 13, 17, 19
//! ```

// =============================================================================
// ROUNDS
// =============================================================================

/// Rounds of the compression function.
pub const ROUNDS: usize = 12;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Message block size in bytes.
pub const BLOCK_BYTES: usize = 128;

/// Message words per block.
pub const BLOCK_WORDS: usize = BLOCK_BYTES / 8;

/// Chaining value words.
pub const STATE_WORDS: usize = 8;

/// Size of the chaining value in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * core::mem::size_of::<u64>();

/// Minimum digest size in bytes.
pub const BYTES_MIN: usize = 1;

/// Maximum digest size in bytes.
pub const BYTES_MAX: usize = 64;

/// Default digest size in bytes (BLAKE2b-256).
pub const BYTES: usize = 32;

/// Smallest digest size that still meets a 128-bit collision security target.
pub const BYTES_RECOMMENDED_MIN: usize = 32;

// =============================================================================
// INITIALIZATION VECTOR
// =============================================================================

pub const IV: [u64; STATE_WORDS] = [
    0x6A09_E667_F3BC_C908, // sqrt(2)
    0xBB67_AE85_84CA_A73B, // sqrt(3)
    0x3C6E_F372_FE94_F82B, // sqrt(5)
    0xA54F_F53A_5F1D_36F1, // sqrt(7)
    0x510E_527F_ADE6_82D1, // sqrt(11)
    0x9B05_688C_2B3E_6C1F, // sqrt(13)
    0x1F83_D9AB_FB41_BD6B, // sqrt(17)
    0x5BE0_CD19_137E_2179, // sqrt(19)
];

// =============================================================================
// MESSAGE SCHEDULE
// =============================================================================

/// Message word permutation per round. Round `r` uses `SIGMA[r % 10]`.
#[rustfmt::skip]
pub const SIGMA: [[usize; BLOCK_WORDS]; 10] = [
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
    [14, 10,  4,  8,  9, 15, 13,  6,  1, 12,  0,  2, 11,  7,  5,  3],
    [11,  8, 12,  0,  5,  2, 15, 13, 10, 14,  3,  6,  7,  1,  9,  4],
    [ 7,  9,  3,  1, 13, 12, 11, 14,  2,  6,  5, 10,  4,  0, 15,  8],
    [ 9,  0,  5,  7,  2,  4, 10, 15, 14,  1, 11, 12,  6,  8,  3, 13],
    [ 2, 12,  6, 10,  0, 11,  8,  3,  4, 13,  7,  5, 15, 14,  1,  9],
    [12,  5,  1, 15, 14, 13,  4, 10,  0,  7,  6,  3,  9,  2,  8, 11],
    [13, 11,  7, 14, 12,  1,  3,  9,  5,  0, 15,  4,  8,  6,  2, 10],
    [ 6, 15, 14,  9, 11,  3,  0,  8, 12,  2, 13,  7,  1,  4, 10,  5],
    [10,  2,  8,  4,  7,  6,  1,  5, 15, 11,  9, 14,  3, 12, 13,  0],
];

// =============================================================================
// G ROTATIONS
// =============================================================================

pub const R1: u32 = 32;
pub const R2: u32 = 24;
pub const R3: u32 = 16;
pub const R4: u32 = 63;

// =============================================================================
// PARAMETER BLOCK
// =============================================================================

/// Fanout for sequential (non-tree) hashing.
pub const FANOUT: u8 = 1;

/// Maximal depth for sequential (non-tree) hashing.
pub const DEPTH: u8 = 1;
