// src/lib.rs
//! textcrypt: small cryptographic services for short text payloads
//!
//! Features:
//! - Symmetric text encryption under a key re-derived per call (AES-256-ECB,
//!   or AES-256-GCM when asked for)
//! - Keyed HMAC-SHA512 hashing of text for credential checks
//! - RSA-OAEP encryption with PKCS#1 PEM key files on disk
//!
//! The symmetric and asymmetric services share nothing; callers compose them.

pub mod aliases;
pub mod asymmetric;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod symmetric;

// Re-export everything users need at the crate root
pub use asymmetric::{create_key_files, KeyManager, KeyPaths};
pub use config::{load as load_config, Config};
pub use enums::{CipherMode, RsaPadding};
pub use error::{CoreError, Result};
pub use symmetric::{
    decrypt, derive_key, encrypt, hash_message, verify_hash, SecretMaterial, SymmetricCipher,
};
