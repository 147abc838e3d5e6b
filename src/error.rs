// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to load key from {}: {reason}", .path.display())]
    KeyLoad { path: PathBuf, reason: String },

    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Carries no detail: wrong key, bad base64, bad padding and
    /// bad UTF-8 must all look the same to the caller.
    #[error("decryption failed")]
    Decryption,

    #[error("failed to generate key pair in {}: {source}", .path.display())]
    KeyGeneration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid secret material: {0}")]
    InvalidSecret(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}
