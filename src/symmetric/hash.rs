// src/symmetric/hash.rs
//! Keyed, one-way hashing of text for credential verification

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::Mac;

use super::kdf::{keyed_sha512, HmacSha512};
use crate::error::{CoreError, Result};

/// HMAC-SHA512 over the UTF-16LE encoding of `msg`, keyed by `hash_secret`,
/// base64-encoded. Deterministic for identical inputs.
pub fn hash_message(msg: &str, hash_secret: &str) -> Result<String> {
    if hash_secret.is_empty() {
        return Err(CoreError::InvalidSecret("hash secret must not be empty"));
    }
    let digest = keyed_sha512(hash_secret.as_bytes(), &utf16le(msg))?;
    Ok(STANDARD.encode(digest))
}

/// Recompute the digest of `msg` and compare it to `digest` in constant time.
/// Malformed digests and empty hash secrets simply do not match.
pub fn verify_hash(msg: &str, hash_secret: &str, digest: &str) -> bool {
    if hash_secret.is_empty() {
        return false;
    }
    let Ok(expected) = STANDARD.decode(digest.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha512::new_from_slice(hash_secret.as_bytes()) else {
        return false;
    };
    mac.update(&utf16le(msg));
    mac.verify_slice(&expected).is_ok()
}

fn utf16le(msg: &str) -> Vec<u8> {
    msg.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
