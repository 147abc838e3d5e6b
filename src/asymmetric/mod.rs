// src/asymmetric/mod.rs
//! Asymmetric key manager: an RSA key pair loaded once, used for the
//! lifetime of the process
//!
//! A [`KeyManager`] only exists once both PEM files have been read and
//! parsed. After that the keys are read-only, so the manager can be shared
//! across threads (behind an `Arc`) without locking.
//!
//! [`KeyManager::create_keys`] writes a fresh pair to disk but does not
//! touch the keys already loaded in memory. Regeneration is an offline step;
//! pick up new keys by constructing a new manager (in practice, restarting).

mod keygen;
mod pem;

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::Sha256;
use tracing::{debug, info};

use crate::config::EncryptionConfig;
use crate::consts::RSA_KEY_BITS;
pub use crate::enums::RsaPadding;
use crate::error::{CoreError, Result};
pub use keygen::{create_key_files, KeyPaths};

pub struct KeyManager {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    padding: RsaPadding,
}

impl KeyManager {
    /// Read both PEM files eagerly. Fails with [`CoreError::KeyLoad`] if
    /// either file is missing, unreadable, not an RSA key, or if the two
    /// halves do not belong together.
    pub fn load(
        private_key_path: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::load_with_padding(private_key_path, public_key_path, RsaPadding::default())
    }

    pub fn load_with_padding(
        private_key_path: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
        padding: RsaPadding,
    ) -> Result<Self> {
        let private_key_path = private_key_path.as_ref();
        let public_key_path = public_key_path.as_ref();

        let private_key = pem::read_private_key(private_key_path)?;
        let public_key = pem::read_public_key(public_key_path)?;

        if RsaPublicKey::from(&private_key) != public_key {
            return Err(pem::key_load(
                public_key_path,
                "public key does not match private key",
            ));
        }

        let manager = Self {
            private_key,
            public_key,
            padding,
        };
        info!(
            private_key = %private_key_path.display(),
            public_key = %public_key_path.display(),
            bits = manager.modulus_bits(),
            padding = ?padding,
            "loaded RSA key pair"
        );
        Ok(manager)
    }

    pub fn from_config(config: &EncryptionConfig) -> Result<Self> {
        Self::load_with_padding(
            &config.private_key_file,
            &config.public_key_file,
            config.padding,
        )
    }

    pub fn padding(&self) -> RsaPadding {
        self.padding
    }

    pub fn modulus_bits(&self) -> usize {
        self.public_key.size() * 8
    }

    /// Largest message, in UTF-8 bytes, that [`encrypt`](Self::encrypt) accepts
    pub fn max_plaintext_len(&self) -> usize {
        self.padding.max_plaintext_len(self.public_key.size())
    }

    /// RSA-OAEP encrypt `msg` with the public key; returns base64.
    /// Messages over [`max_plaintext_len`](Self::max_plaintext_len) fail.
    pub fn encrypt(&self, msg: &str) -> Result<String> {
        let max = self.max_plaintext_len();
        if msg.len() > max {
            return Err(CoreError::Encryption(format!(
                "message is {} bytes, a {}-bit key takes at most {max}",
                msg.len(),
                self.modulus_bits()
            )));
        }

        let ciphertext = self
            .public_key
            .encrypt(&mut OsRng, oaep(self.padding), msg.as_bytes())
            .map_err(|e| CoreError::Encryption(e.to_string()))?;
        debug!(plaintext_len = msg.len(), "RSA encrypted message");
        Ok(STANDARD.encode(ciphertext))
    }

    /// Inverse of [`encrypt`](Self::encrypt). Bad base64, a foreign key,
    /// padding failure and bad UTF-8 are all the same [`CoreError::Decryption`].
    pub fn decrypt(&self, msg: &str) -> Result<String> {
        let ciphertext = STANDARD
            .decode(msg.trim())
            .map_err(|_| CoreError::Decryption)?;
        let plaintext = self
            .private_key
            .decrypt(oaep(self.padding), &ciphertext)
            .map_err(|_| CoreError::Decryption)?;
        debug!(plaintext_len = plaintext.len(), "RSA decrypted message");
        String::from_utf8(plaintext).map_err(|_| CoreError::Decryption)
    }

    /// Write a new 4096-bit pair to `target_dir/public_key.pem` and
    /// `target_dir/private_key.pem`, overwriting without confirmation.
    /// The keys held by `self` are left as they are.
    pub fn create_keys(&self, target_dir: impl AsRef<Path>) -> Result<()> {
        create_key_files(target_dir, RSA_KEY_BITS).map(|_| ())
    }
}

impl fmt::Debug for KeyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyManager")
            .field("bits", &self.modulus_bits())
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

fn oaep(padding: RsaPadding) -> Oaep {
    match padding {
        RsaPadding::OaepSha256 => Oaep::new::<Sha256>(),
        RsaPadding::OaepSha1 => Oaep::new::<Sha1>(),
    }
}
