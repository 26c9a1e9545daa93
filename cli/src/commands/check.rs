//! Check Command
//!
//! Verify checksums from file (like b2sum -c). The digest length of each line
//! is taken from the length of its hex string.

use super::hash::digest_path;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// PARSING
// =============================================================================

/// One `hex  path` line of a checksum list.
#[derive(Debug, PartialEq, Eq)]
struct Entry<'a> {
    expected: Vec<u8>,
    path: &'a str,
}

fn parse_line(line: &str) -> Option<Entry<'_>> {
    let (hex_hash, path) = line.split_once("  ")?;
    let expected = hex::decode(hex_hash.trim()).ok()?;
    if expected.is_empty() || expected.len() > blake2b::BYTES_MAX {
        return None;
    }
    Some(Entry { expected, path: path.trim() })
}

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file. Returns whether every line matched.
pub fn check_mode(checksum_file: &Path) -> Result<bool> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(entry) = parse_line(line) else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        total += 1;

        match digest_path(Path::new(entry.path), entry.expected.len()) {
            Ok(digest) if blake2b::constant_time_eq(&digest, &entry.expected) => {
                println!("{}: OK", entry.path);
            }
            Ok(_) => {
                println!("{}: FAILED", entry.path);
                failed += 1;
            }
            Err(e) => {
                log::debug!("{}: {e:#}", entry.path);
                println!("{}: FAILED ({e})", entry.path);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
    }

    Ok(failed == 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_length_from_hex() {
        let entry = parse_line("00ff  some file.txt").unwrap();
        assert_eq!(entry.expected, vec![0x00, 0xff]);
        assert_eq!(entry.path, "some file.txt");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("nohash"), None);
        assert_eq!(parse_line("zz  file"), None);
        assert_eq!(parse_line("abc  file"), None);
        assert_eq!(parse_line(&format!("{}  file", "00".repeat(65))), None);
    }

    #[test]
    fn checks_mixed_lengths() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.bin");
        std::fs::write(&data, b"abc").unwrap();

        let list = dir.path().join("sums.txt");
        let mut f = File::create(&list).unwrap();
        for size in [20, 32, 64] {
            let digest = blake2b::hash(b"abc", size).unwrap();
            writeln!(f, "{}  {}", digest.to_hex(), data.display()).unwrap();
        }
        drop(f);
        assert!(check_mode(&list).unwrap());

        let mut f = std::fs::OpenOptions::new().append(true).open(&list).unwrap();
        writeln!(f, "{}  {}", "00".repeat(32), data.display()).unwrap();
        drop(f);
        assert!(!check_mode(&list).unwrap());
    }
}
