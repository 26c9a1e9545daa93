//! Constant-time comparison for digests and tags.

use subtle::ConstantTimeEq;

/// Compare two byte strings without leaking where they first differ.
///
/// Lengths are treated as public: inputs of different lengths are unequal.
/// For equal lengths every byte pair is XORed and OR-accumulated before the
/// single final check, so the running time depends only on the length.
///
/// # Example
/// ```rust
/// assert!(blake2b::constant_time_eq(b"tag", b"tag"));
/// assert!(!blake2b::constant_time_eq(b"tag", b"tab"));
/// ```
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices() {
        assert!(constant_time_eq(&[], &[]));
        assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
    }

    #[test]
    fn difference_at_any_position() {
        let base = [0x55u8; 64];
        for i in 0..base.len() {
            let mut other = base;
            other[i] ^= 0x80;
            assert!(!constant_time_eq(&base, &other), "missed diff at {i}");
        }
    }

    #[test]
    fn length_mismatch() {
        assert!(!constant_time_eq(&[0; 32], &[0; 31]));
        assert!(!constant_time_eq(&[0; 32], &[]));
    }
}
