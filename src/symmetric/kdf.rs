// src/symmetric/kdf.rs
//! Secret material and per-call key derivation
//!
//! The symmetric key is never stored. Every encrypt/decrypt call re-derives
//! it as `HMAC-SHA512(key = hash_secret, data = secret)` and uses the leading
//! 32 bytes as the AES-256 key.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::aliases::{AesKey32, DerivedKey64, HashSecret, Secret};
use crate::consts::{AES_KEY_LEN, DERIVED_KEY_LEN};
use crate::error::{CoreError, Result};

pub(crate) type HmacSha512 = Hmac<Sha512>;

/// `(secret, hash_secret)` pair supplied by the caller for every symmetric
/// operation. Both halves are non-empty and zeroized on drop.
pub struct SecretMaterial {
    secret: Secret,
    hash_secret: HashSecret,
}

impl SecretMaterial {
    pub fn new(secret: impl Into<String>, hash_secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        let hash_secret = hash_secret.into();

        if secret.is_empty() {
            return Err(CoreError::InvalidSecret("secret must not be empty"));
        }
        if hash_secret.is_empty() {
            return Err(CoreError::InvalidSecret("hash secret must not be empty"));
        }

        Ok(Self {
            secret: Secret::new(secret),
            hash_secret: HashSecret::new(hash_secret),
        })
    }

    /// Full 64-byte HMAC-SHA512 output
    pub fn derive_key(&self) -> Result<DerivedKey64> {
        let digest = keyed_sha512(
            self.hash_secret.as_bytes(),
            self.secret.as_bytes(),
        )?;
        Ok(DerivedKey64::new(digest))
    }

    pub(crate) fn aes_key(&self) -> Result<AesKey32> {
        let derived = self.derive_key()?;
        let mut key = [0u8; AES_KEY_LEN];
        key.copy_from_slice(&derived[..AES_KEY_LEN]);
        Ok(AesKey32::new(key))
    }
}

impl fmt::Debug for SecretMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretMaterial")
            .field("secret", &"[REDACTED]")
            .field("hash_secret", &"[REDACTED]")
            .finish()
    }
}

/// Derive the key for `(secret, hash_secret)` without keeping the pair around
pub fn derive_key(secret: &str, hash_secret: &str) -> Result<DerivedKey64> {
    SecretMaterial::new(secret, hash_secret)?.derive_key()
}

pub(crate) fn keyed_sha512(key: &[u8], data: &[u8]) -> Result<[u8; DERIVED_KEY_LEN]> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|_| CoreError::InvalidSecret("hash secret rejected by HMAC"))?;
    mac.update(data);

    let mut out = [0u8; DERIVED_KEY_LEN];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}
