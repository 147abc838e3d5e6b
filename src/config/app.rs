// src/config/app.rs
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use super::defaults::default_encryption;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, PRIVATE_KEY_ENV_VAR, PUBLIC_KEY_ENV_VAR};
use crate::enums::{CipherMode, RsaPadding};
use crate::error::{CoreError, Result};
use crate::symmetric::{SecretMaterial, SymmetricCipher};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub encryption: EncryptionConfig,
    pub symmetric: SymmetricConfig,
    pub authentication: AuthConfig,
}

/// Where the RSA key pair lives and how it pads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncryptionConfig {
    pub public_key_file: PathBuf,
    pub private_key_file: PathBuf,
    pub padding: RsaPadding,
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        default_encryption()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SymmetricConfig {
    pub mode: CipherMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub keys: HashMap<String, KeyEntry>,
}

/// One named `(secret, hash_key)` pair, e.g. `[authentication.keys.cookie]`
#[derive(Clone, Deserialize)]
pub struct KeyEntry {
    pub secret: String,
    pub hash_key: String,
}

impl fmt::Debug for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyEntry { .. }")
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Key file paths from `lookup` (normally the process environment) win
    /// over the file.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(PUBLIC_KEY_ENV_VAR) {
            self.encryption.public_key_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(PRIVATE_KEY_ENV_VAR) {
            self.encryption.private_key_file = PathBuf::from(path);
        }
    }

    pub fn secret_material(&self, name: &str) -> Result<SecretMaterial> {
        let entry = self
            .authentication
            .keys
            .get(name)
            .ok_or_else(|| CoreError::Config(format!("no key entry named `{name}`")))?;
        SecretMaterial::new(entry.secret.as_str(), entry.hash_key.as_str())
    }

    /// Secret material for `name` bound to the configured cipher mode
    pub fn symmetric_cipher(&self, name: &str) -> Result<SymmetricCipher> {
        Ok(SymmetricCipher::new(
            self.secret_material(name)?,
            self.symmetric.mode,
        ))
    }
}

/// Load the file named by `TEXTCRYPT_CONFIG` (default `textcrypt.toml`),
/// falling back to built-in defaults when it does not exist, then apply env
/// overrides. An unreadable or invalid file is an error.
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        info!(path = %config_path, "loading configuration");
        Config::from_path(&config_path)?
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    conf.apply_overrides(|key| std::env::var(key).ok());
    Ok(conf)
}
