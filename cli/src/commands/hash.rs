//! Hash Command
//!
//! File hashing, one hasher per file, files spread across threads via Rayon.

use anyhow::{anyhow, ensure, Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const READ_BUFFER: usize = 128 * 1024;

/// Parse a `--length` value in bits into a digest size in bytes.
pub fn parse_length(arg: &str) -> Result<usize> {
    let bits: usize = arg.parse().with_context(|| format!("invalid length: {arg}"))?;
    ensure!(bits % 8 == 0, "length is not a multiple of 8: {bits}");
    ensure!(
        (8..=512).contains(&bits),
        "length out of range 8..=512: {bits}"
    );
    Ok(bits / 8)
}

/// Stream `reader` through a hasher of `digest_size` bytes.
pub fn digest_reader(mut reader: impl Read, digest_size: usize) -> Result<blake2b::Output> {
    let mut hasher = blake2b::Hasher::new(digest_size).map_err(|e| anyhow!("{e}"))?;
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize())
}

/// Hash the file at `path` (`-` is standard input).
pub fn digest_path(path: &Path, digest_size: usize) -> Result<blake2b::Output> {
    if path.as_os_str() == "-" {
        return digest_reader(io::stdin().lock(), digest_size);
    }
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    digest_reader(file, digest_size)
}

/// Hash files and print `hex  path` lines in argument order.
pub fn hash_files(files: &[PathBuf], digest_size: usize) -> Result<()> {
    if !blake2b::is_recommended_size(digest_size) {
        log::warn!(
            "{}-bit digests are below the 128-bit collision security level",
            digest_size * 8
        );
    }

    // Indexed parallel collect keeps the input order.
    let results: Vec<_> = files
        .par_iter()
        .map(|path| digest_path(path, digest_size))
        .collect();

    let mut failed = 0;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(digest) => println!("{}  {}", digest.to_hex(), path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
