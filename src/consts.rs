// src/consts.rs
//! Shared constants: key sizes, file names and environment variables

/// Default RSA modulus size for generated key pairs
pub const RSA_KEY_BITS: usize = 4096;

/// File name of the public half written by key generation
pub const PUBLIC_KEY_FILE_NAME: &str = "public_key.pem";

/// File name of the private half written by key generation
pub const PRIVATE_KEY_FILE_NAME: &str = "private_key.pem";

/// HMAC-SHA512 output length
pub const DERIVED_KEY_LEN: usize = 64;

/// AES-256 key length; the leading bytes of the derived key
pub const AES_KEY_LEN: usize = 32;

/// AES-GCM nonce length (96 bits)
pub const GCM_NONCE_LEN: usize = 12;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "TEXTCRYPT_CONFIG";

/// Config file used when `TEXTCRYPT_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "textcrypt.toml";

pub const PUBLIC_KEY_ENV_VAR: &str = "TEXTCRYPT_PUBLIC_KEY_FILE";
pub const PRIVATE_KEY_ENV_VAR: &str = "TEXTCRYPT_PRIVATE_KEY_FILE";
