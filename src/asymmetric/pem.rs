// src/asymmetric/pem.rs
//! PEM reading and writing for RSA key files
//!
//! Keys are written as PKCS#1 (`BEGIN RSA PRIVATE KEY` / `BEGIN RSA PUBLIC
//! KEY`). On read, PKCS#8 and SPKI are accepted as a fallback so keys
//! exported by other tools load too. Writes go to a temp file in the
//! target directory that the caller renames into place.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tempfile::NamedTempFile;

use crate::error::{CoreError, Result};

pub(crate) fn read_private_key(path: &Path) -> Result<RsaPrivateKey> {
    let pem = read_pem(path)?;
    RsaPrivateKey::from_pkcs1_pem(&pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(&pem))
        .map_err(|e| key_load(path, format!("not an RSA private key: {e}")))
}

pub(crate) fn read_public_key(path: &Path) -> Result<RsaPublicKey> {
    let pem = read_pem(path)?;
    RsaPublicKey::from_pkcs1_pem(&pem)
        .or_else(|_| RsaPublicKey::from_public_key_pem(&pem))
        .map_err(|e| key_load(path, format!("not an RSA public key: {e}")))
}

/// Public key staged next to its destination, world-readable on Unix
pub(crate) fn stage_public_key(dir: &Path, key: &RsaPublicKey) -> io::Result<NamedTempFile> {
    let pem = key.to_pkcs1_pem(LineEnding::LF).map_err(io::Error::other)?;
    stage(dir, pem.as_bytes(), 0o644)
}

/// Private key staged next to its destination, owner-only on Unix
pub(crate) fn stage_private_key(dir: &Path, key: &RsaPrivateKey) -> io::Result<NamedTempFile> {
    let pem = key.to_pkcs1_pem(LineEnding::LF).map_err(io::Error::other)?;
    stage(dir, pem.as_bytes(), 0o600)
}

// The mode is set on a fresh inode, never on a file previously at the destination
#[cfg_attr(not(unix), allow(unused_variables))]
fn stage(dir: &Path, contents: &[u8], mode: u32) -> io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(".textcrypt-key-")
        .tempfile_in(dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file().set_permissions(fs::Permissions::from_mode(mode))?;
    }
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    Ok(file)
}

fn read_pem(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| key_load(path, e.to_string()))
}

pub(crate) fn key_load(path: &Path, reason: impl Into<String>) -> CoreError {
    CoreError::KeyLoad {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
