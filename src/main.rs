//! `filehash` entry point
//!
//! Thin I/O shell around the hashing core: acquire the input bytes,
//! compute the digest, print it. The core is never invoked when input
//! acquisition fails.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use filehash::hash::sha256;

/// Computes the SHA-256 digest of a file.
///
/// Prints the digest as 64 lowercase hexadecimal characters. The only
/// failure mode is an unreadable input file, reported on stderr with a
/// non-zero exit status.
#[derive(Parser, Debug)]
#[command(name = "filehash", version, about)]
struct Cli {
    /// Path of the file to hash.
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let contents = fs::read(&cli.file)
        .with_context(|| format!("could not open file {}", cli.file.display()))?;

    println!("SHA-256 Hash: {}", sha256(&contents));

    Ok(())
}
