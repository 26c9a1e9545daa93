use blake2::digest::{Update, VariableOutput};
use bolero::check;

#[test]
fn fuzz_against_reference() {
    check!().with_type::<(u8, Vec<u8>)>().for_each(|(size, data)| {
        let size = usize::from(*size % 64) + 1;

        let Ok(ours) = blake2b::hash(data, size) else {
            return;
        };

        let Ok(mut reference) = blake2::Blake2bVar::new(size) else {
            return;
        };
        reference.update(data);
        let mut expected = vec![0u8; size];
        if reference.finalize_variable(&mut expected).is_err() {
            return;
        }

        assert_eq!(ours.as_bytes(), &expected[..], "Reference mismatch at size {size}");
    });
}
