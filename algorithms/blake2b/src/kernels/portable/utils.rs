//! Word-level helpers for the portable kernel.

use crate::kernels::constants::{BLOCK_BYTES, BLOCK_WORDS, R1, R2, R3, R4};

/// 16-word working vector, cache-line aligned.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(64))]
pub struct WorkVector {
    pub v: [u64; 16],
}

impl WorkVector {
    pub const fn zero() -> Self {
        Self { v: [0; 16] }
    }

    /// The mixing function `G`. Wrapping adds, fixed rotations.
    #[inline]
    #[allow(clippy::many_single_char_names)]
    pub fn g(&mut self, a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        let v = &mut self.v;
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
        v[d] = (v[d] ^ v[a]).rotate_right(R1);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(R2);
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
        v[d] = (v[d] ^ v[a]).rotate_right(R3);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(R4);
    }
}

/// Load a block as 16 little-endian words.
#[inline]
pub fn load_words(block: &[u8; BLOCK_BYTES]) -> [u64; BLOCK_WORDS] {
    let mut m = [0u64; BLOCK_WORDS];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(bytes);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_words_is_little_endian() {
        let mut block = [0u8; BLOCK_BYTES];
        block[0] = 0x01;
        block[7] = 0x80;
        block[8] = 0xFF;
        let m = load_words(&block);
        assert_eq!(m[0], 0x8000_0000_0000_0001);
        assert_eq!(m[1], 0xFF);
        assert!(m[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn g_on_zero_vector_stays_zero() {
        let mut w = WorkVector::zero();
        w.g(0, 4, 8, 12, 0, 0);
        assert_eq!(w.v, [0u64; 16]);
    }

    #[test]
    fn g_only_touches_its_four_words() {
        let mut w = WorkVector::zero();
        w.g(1, 5, 9, 13, 0x0123_4567_89AB_CDEF, 7);
        for (i, &word) in w.v.iter().enumerate() {
            if ![1, 5, 9, 13].contains(&i) {
                assert_eq!(word, 0, "word {i} modified");
            }
        }
        assert_ne!(w.v[1], 0);
    }
}
