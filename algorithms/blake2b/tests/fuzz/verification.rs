use bolero::check;
use blake2b::{hash, verify};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<(u8, Vec<u8>)>().for_each(|(size, data)| {
        let size = usize::from(*size % 64) + 1;

        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let Ok(h) = hash(data, size) else {
            return;
        };
        assert!(verify(data, &h), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, &h),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        let mut bad_h = h.as_bytes().to_vec();
        bad_h[0] ^= 0xFF;
        assert!(!verify(data, &bad_h), "verify() succeeded on corrupted hash");

        // 3. Truncated Tag
        if size > 1 {
            assert!(
                !verify(data, &h[..size - 1]),
                "verify() succeeded on truncated hash"
            );
        }
    });
}
