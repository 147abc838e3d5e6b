// src/symmetric/gcm.rs
//! AES-256-GCM with a random nonce
//!
//! Wire layout: nonce (12 bytes) || ciphertext || tag (16 bytes)

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::aliases::AesKey32;
use crate::consts::GCM_NONCE_LEN;
use crate::error::{CoreError, Result};

const TAG_LEN: usize = 16;

pub(crate) fn seal(key: &AesKey32, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;

    let mut nonce = [0u8; GCM_NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CoreError::Encryption(e.to_string()))?;

    let mut out = Vec::with_capacity(GCM_NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

pub(crate) fn open(key: &AesKey32, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < GCM_NONCE_LEN + TAG_LEN {
        return Err(CoreError::Decryption);
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| CoreError::Decryption)?;
    let (nonce, ciphertext) = sealed.split_at(GCM_NONCE_LEN);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CoreError::Decryption)
}
