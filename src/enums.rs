// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible algorithm choices. Both are
//! selectable from the TOML config.

use serde::{Deserialize, Serialize};

/// Block cipher mode for symmetric text encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum CipherMode {
    /// AES-256-ECB with PKCS7 padding. Deterministic: equal plaintexts under
    /// equal keys give equal ciphertexts. Kept for compatibility with stored
    /// ciphertexts; not semantically secure.
    #[default]
    Ecb,
    /// AES-256-GCM with a random 96-bit nonce per message
    Gcm,
}

/// RSA encryption padding. The digest is pinned so that ciphertexts stay
/// interoperable regardless of library defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RsaPadding {
    #[default]
    OaepSha256,
    /// OAEP with SHA-1 for both the label hash and MGF1, the OpenSSL default
    OaepSha1,
}

impl RsaPadding {
    /// Digest output length in bytes
    pub fn hash_len(self) -> usize {
        match self {
            RsaPadding::OaepSha256 => 32,
            RsaPadding::OaepSha1 => 20,
        }
    }

    /// Largest plaintext accepted for a modulus of `modulus_len` bytes
    pub fn max_plaintext_len(self, modulus_len: usize) -> usize {
        modulus_len.saturating_sub(2 * self.hash_len() + 2)
    }
}
