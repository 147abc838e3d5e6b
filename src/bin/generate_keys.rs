// src/bin/generate_keys.rs
//! Offline RSA key pair generation
//!
//! Running services keep the keys they loaded at startup; restart them to
//! pick up a regenerated pair.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use textcrypt::consts::RSA_KEY_BITS;
use textcrypt::create_key_files;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "generate_keys", version, about = "Generate an RSA key pair as PKCS#1 PEM files")]
struct Args {
    /// Directory that receives public_key.pem and private_key.pem (created if missing)
    target_dir: PathBuf,

    /// RSA modulus size in bits
    #[arg(long, default_value_t = RSA_KEY_BITS)]
    bits: usize,
}

fn main() -> Result<()> {
    textcrypt::logging::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.target_dir)
        .with_context(|| format!("cannot create {}", args.target_dir.display()))?;

    info!(dir = %args.target_dir.display(), bits = args.bits, "generating key pair");
    let paths = create_key_files(&args.target_dir, args.bits)
        .with_context(|| format!("key generation in {} failed", args.target_dir.display()))?;

    println!("{}", paths.public_key.display());
    println!("{}", paths.private_key.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn bits_defaults_to_4096() {
        let args = Args::try_parse_from(["generate_keys", "keys"]).unwrap();
        assert_eq!(args.target_dir, PathBuf::from("keys"));
        assert_eq!(args.bits, RSA_KEY_BITS);
    }

    #[test]
    fn parses_bits_in_both_spellings() {
        let spaced = Args::try_parse_from(["generate_keys", "keys", "--bits", "2048"]).unwrap();
        let joined = Args::try_parse_from(["generate_keys", "--bits=3072", "keys"]).unwrap();
        assert_eq!(spaced.bits, 2048);
        assert_eq!(joined.bits, 3072);
    }

    #[test]
    fn rejects_bad_invocations() {
        assert!(Args::try_parse_from(["generate_keys"]).is_err());
        assert!(Args::try_parse_from(["generate_keys", "keys", "--bits"]).is_err());
        assert!(Args::try_parse_from(["generate_keys", "keys", "--bits", "lots"]).is_err());
        assert!(Args::try_parse_from(["generate_keys", "keys", "extra"]).is_err());
    }
}
