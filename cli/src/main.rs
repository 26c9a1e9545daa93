//! BLAKE2b CLI
//!
//! `b2sum`-style checksum tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, parse_length};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "blake2b")]
#[command(about = "Print or check BLAKE2b (RFC 7693) checksums", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash; `-` or none reads standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest length in bits, a multiple of 8 between 8 and 512
    #[arg(short, long, value_name = "BITS", default_value_t = 512, value_parser = parse_length)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like b2sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => {
            if !check_mode(checksum_file)? {
                std::process::exit(1);
            }
        }
        None => {
            let stdin = [PathBuf::from("-")];
            let files = if cli.files.is_empty() { &stdin[..] } else { &cli.files[..] };
            hash_files(files, cli.length)?;
        }
    }

    Ok(())
}
