// src/aliases.rs
//! Secret-bearing types used throughout textcrypt
//!
//! Every one of them zeroizes its contents on drop.

pub use zeroize::Zeroizing;

use crate::consts::{AES_KEY_LEN, DERIVED_KEY_LEN};

// Fixed-size secrets
pub type DerivedKey64 = Zeroizing<[u8; DERIVED_KEY_LEN]>; // HMAC-SHA512(secret, key = hash secret)
pub type AesKey32 = Zeroizing<[u8; AES_KEY_LEN]>; // leading half of the derived key

// Dynamic secrets
pub type Secret = Zeroizing<String>;
pub type HashSecret = Zeroizing<String>;
