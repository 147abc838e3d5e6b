// src/symmetric/mod.rs
//! Symmetric cipher service: stateless text encryption and keyed hashing
//!
//! The free functions [`encrypt`] and [`decrypt`] are the deterministic
//! AES-256-ECB contract. [`SymmetricCipher`] binds secret material to a
//! [`CipherMode`] for callers that want the authenticated GCM mode instead.
//! Ciphertexts are standard base64 strings.

mod ecb;
mod gcm;
mod hash;
mod kdf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

pub use crate::enums::CipherMode;
use crate::error::{CoreError, Result};
pub use hash::{hash_message, verify_hash};
pub use kdf::{derive_key, SecretMaterial};

/// Encrypt `msg` with AES-256-ECB under the key derived from
/// `(secret, hash_secret)`.
///
/// Equal inputs give equal outputs. That is a property of ECB, not a bug,
/// and it leaks message equality to anyone holding the ciphertexts.
pub fn encrypt(msg: &str, secret: &str, hash_secret: &str) -> Result<String> {
    SymmetricCipher::new(SecretMaterial::new(secret, hash_secret)?, CipherMode::Ecb).encrypt(msg)
}

/// Inverse of [`encrypt`]. Every failure, including a wrong key, is
/// [`CoreError::Decryption`].
pub fn decrypt(encrypted_msg: &str, secret: &str, hash_secret: &str) -> Result<String> {
    SymmetricCipher::new(SecretMaterial::new(secret, hash_secret)?, CipherMode::Ecb)
        .decrypt(encrypted_msg)
}

/// Secret material bound to a cipher mode. The AES key is re-derived on
/// every call and dropped (zeroized) right after.
#[derive(Debug)]
pub struct SymmetricCipher {
    material: SecretMaterial,
    mode: CipherMode,
}

impl SymmetricCipher {
    pub fn new(material: SecretMaterial, mode: CipherMode) -> Self {
        Self { material, mode }
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn encrypt(&self, msg: &str) -> Result<String> {
        let key = self.material.aes_key()?;
        let raw = match self.mode {
            CipherMode::Ecb => ecb::seal(&key, msg.as_bytes())?,
            CipherMode::Gcm => gcm::seal(&key, msg.as_bytes())?,
        };
        debug!(
            mode = ?self.mode,
            plaintext_len = msg.len(),
            ciphertext_len = raw.len(),
            "encrypted message"
        );
        Ok(STANDARD.encode(raw))
    }

    pub fn decrypt(&self, encrypted_msg: &str) -> Result<String> {
        let raw = STANDARD
            .decode(encrypted_msg.trim())
            .map_err(|_| CoreError::Decryption)?;
        let key = self.material.aes_key()?;
        let plaintext = match self.mode {
            CipherMode::Ecb => ecb::open(&key, &raw)?,
            CipherMode::Gcm => gcm::open(&key, &raw)?,
        };
        debug!(mode = ?self.mode, ciphertext_len = raw.len(), "decrypted message");
        String::from_utf8(plaintext).map_err(|_| CoreError::Decryption)
    }
}
