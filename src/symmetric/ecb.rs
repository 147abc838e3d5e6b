// src/symmetric/ecb.rs
//! AES-256-ECB with PKCS7 padding
//!
//! No IV, no nonce: identical plaintext under an identical key always yields
//! identical ciphertext. Callers that need semantic security use GCM.

use aes::Aes256;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::aliases::AesKey32;
use crate::error::{CoreError, Result};

type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

const BLOCK_LEN: usize = 16;

pub(crate) fn seal(key: &AesKey32, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256EcbEnc::new_from_slice(key.as_slice())
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

pub(crate) fn open(key: &AesKey32, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CoreError::Decryption);
    }

    let cipher =
        Aes256EcbDec::new_from_slice(key.as_slice()).map_err(|_| CoreError::Decryption)?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::Decryption)
}
