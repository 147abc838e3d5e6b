// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::EncryptionConfig;
use crate::consts::{PRIVATE_KEY_FILE_NAME, PUBLIC_KEY_FILE_NAME};
use crate::enums::RsaPadding;

pub const DEFAULT_KEY_DIR: &str = "keys";

pub fn default_encryption() -> EncryptionConfig {
    EncryptionConfig {
        public_key_file: PathBuf::from(DEFAULT_KEY_DIR).join(PUBLIC_KEY_FILE_NAME),
        private_key_file: PathBuf::from(DEFAULT_KEY_DIR).join(PRIVATE_KEY_FILE_NAME),
        padding: RsaPadding::default(),
    }
}
