#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary (message, tag) pairs: verify must never panic and only accept
// the real digest.
fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else {
        return;
    };
    let (tag, message) = data.split_at(usize::from(split).min(data.len()));

    let accepted = blake2b::verify(message, tag);
    let expected = blake2b::hash(message, tag.len()).is_ok_and(|d| d == *tag);
    assert_eq!(accepted, expected);
});
