#![no_main]

use blake2b::Hasher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, data)) = data.split_first() else {
        return;
    };
    let digest_size = usize::from(size % 64) + 1;

    // Chunk size from the next byte (1 to 255)
    let chunk_size = data.first().map_or(1, |&b| usize::from(b % 255) + 1);

    let reference_hash = blake2b::hash(data, digest_size).unwrap();

    let mut hasher = Hasher::new(digest_size).unwrap();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streaming_hash = hasher.finalize();

    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
});
