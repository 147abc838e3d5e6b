// src/asymmetric/keygen.rs
//! Key pair generation and persistence

use std::io;
use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::info;

use super::pem::{stage_private_key, stage_public_key};
use crate::consts::{PRIVATE_KEY_FILE_NAME, PUBLIC_KEY_FILE_NAME};
use crate::error::{CoreError, Result};

/// Locations of the two PEM files inside a key directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPaths {
    pub public_key: PathBuf,
    pub private_key: PathBuf,
}

impl KeyPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            public_key: dir.join(PUBLIC_KEY_FILE_NAME),
            private_key: dir.join(PRIVATE_KEY_FILE_NAME),
        }
    }
}

/// Generate a `bits`-bit RSA key pair and write both halves into
/// `target_dir`, overwriting existing files. The directory must exist.
///
/// If anything fails before the private key is renamed into place, the
/// files already in `target_dir` are left exactly as they were.
pub fn create_key_files(target_dir: impl AsRef<Path>, bits: usize) -> Result<KeyPaths> {
    let target_dir = target_dir.as_ref();
    let generation_error = |source: io::Error| CoreError::KeyGeneration {
        path: target_dir.to_path_buf(),
        source,
    };

    if !target_dir.is_dir() {
        return Err(generation_error(io::Error::new(
            io::ErrorKind::NotFound,
            "target directory does not exist",
        )));
    }

    let private_key = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| generation_error(io::Error::other(e.to_string())))?;
    let public_key = RsaPublicKey::from(&private_key);

    // Both halves are fully written before either one replaces a live file
    let staged_private = stage_private_key(target_dir, &private_key).map_err(generation_error)?;
    let staged_public = stage_public_key(target_dir, &public_key).map_err(generation_error)?;

    let paths = KeyPaths::in_dir(target_dir);
    staged_private
        .persist(&paths.private_key)
        .map_err(|e| generation_error(e.error))?;
    staged_public
        .persist(&paths.public_key)
        .map_err(|e| generation_error(e.error))?;

    info!(
        bits,
        public_key = %paths.public_key.display(),
        private_key = %paths.private_key.display(),
        "generated RSA key pair"
    );
    Ok(paths)
}
