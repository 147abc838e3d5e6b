// tests/symmetric_tests.rs
mod common;

use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use textcrypt::{
    decrypt, encrypt, hash_message, verify_hash, CipherMode, CoreError, SecretMaterial,
    SymmetricCipher,
};

const SECRET: &str = "correct-secret";
const HASH_KEY: &str = "correct-hashkey";

#[test]
fn test_end_to_end_scenario() {
    common::setup();

    let ciphertext = encrypt("hello world", SECRET, HASH_KEY).unwrap();
    assert_eq!(decrypt(&ciphertext, SECRET, HASH_KEY).unwrap(), "hello world");

    let wrong = decrypt(&ciphertext, "wrong-secret", HASH_KEY);
    assert_ne!(wrong.ok().as_deref(), Some("hello world"));
}

#[test]
fn test_encrypt_matches_known_vectors() {
    assert_eq!(
        encrypt("hello world", SECRET, HASH_KEY).unwrap(),
        "IndhKFUynjeqaWYl+FUq4A=="
    );
    // empty input still produces one full padding block
    assert_eq!(
        encrypt("", SECRET, HASH_KEY).unwrap(),
        "l0Vl5KWzfh7m64nnSxoDwQ=="
    );
}

#[test]
fn test_ecb_is_deterministic() {
    // Known weakness of ECB: equal plaintexts are visible as equal ciphertexts
    let first = encrypt("test", SECRET, HASH_KEY).unwrap();
    let second = encrypt("test", SECRET, HASH_KEY).unwrap();
    let third = encrypt("test", SECRET, HASH_KEY).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_roundtrip_various_messages() {
    let long = "long message ".repeat(40);
    let messages: [&str; 5] = [
        "",
        "a",
        "exactly sixteen!",
        "h\u{e9}llo w\u{f6}rld \u{1F512}",
        long.as_str(),
    ];
    for msg in messages {
        let ciphertext = encrypt(msg, SECRET, HASH_KEY).unwrap();
        assert_eq!(decrypt(&ciphertext, SECRET, HASH_KEY).unwrap(), msg);
    }
}

#[test]
fn test_mismatched_hash_secret_does_not_recover_plaintext() {
    let msg = "session=42;user=alice;expires=1700000000";
    let ciphertext = encrypt(msg, SECRET, HASH_KEY).unwrap();

    for (secret, hash_key) in [
        ("wrong-secret", HASH_KEY),
        (SECRET, "wrong-hashkey"),
        ("wrong-secret", "wrong-hashkey"),
    ] {
        let result = decrypt(&ciphertext, secret, hash_key);
        assert_ne!(result.ok().as_deref(), Some(msg));
    }
}

#[test]
fn test_malformed_ciphertext_is_decryption_error() {
    assert!(matches!(
        decrypt("not base64 at all!", SECRET, HASH_KEY),
        Err(CoreError::Decryption)
    ));

    let short = STANDARD.encode([1u8, 2, 3, 4, 5]);
    assert!(matches!(
        decrypt(&short, SECRET, HASH_KEY),
        Err(CoreError::Decryption)
    ));

    assert!(matches!(
        decrypt("", SECRET, HASH_KEY),
        Err(CoreError::Decryption)
    ));
}

#[test]
fn test_empty_secret_material_is_rejected() {
    assert!(matches!(
        encrypt("msg", "", HASH_KEY),
        Err(CoreError::InvalidSecret(_))
    ));
    assert!(matches!(
        encrypt("msg", SECRET, ""),
        Err(CoreError::InvalidSecret(_))
    ));
    assert!(matches!(
        hash_message("msg", ""),
        Err(CoreError::InvalidSecret(_))
    ));
}

#[test]
fn test_hash_message_matches_known_vectors() {
    assert_eq!(
        hash_message("mypassword123", "cookie-secret").unwrap(),
        "9aXNbe+fjsMPvgE0iET4gMaA7ZpiUU7x5RayDsY244FQObkH86g4NvD5WLzkSWKM8gYz3r0ecMid5GxvDElRMA=="
    );
    assert_eq!(
        hash_message("", "cookie-secret").unwrap(),
        "ZaX1N6iOSzKj9e+cSNkaF8np+wjxmk/IiyhjrDxUQN6fzKb00URlu20fJuePZc6k5yyq1ccIv2FNyPB+Y41mcw=="
    );
}

#[test]
fn test_hash_message_is_deterministic() {
    for _ in 0..5 {
        assert_eq!(
            hash_message("123anotherpassword", HASH_KEY).unwrap(),
            hash_message("123anotherpassword", HASH_KEY).unwrap()
        );
    }
}

#[test]
fn test_single_character_changes_change_the_digest() {
    let msg = "newandfinalpassword";
    let mut digests = HashSet::new();
    digests.insert(hash_message(msg, HASH_KEY).unwrap());

    for i in 0..msg.len() {
        let mut bytes = msg.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'x' { b'y' } else { b'x' };
        let altered = String::from_utf8(bytes).unwrap();
        assert!(digests.insert(hash_message(&altered, HASH_KEY).unwrap()));
    }

    for i in 0..HASH_KEY.len() {
        let mut bytes = HASH_KEY.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'x' { b'y' } else { b'x' };
        let altered = String::from_utf8(bytes).unwrap();
        assert!(digests.insert(hash_message(msg, &altered).unwrap()));
    }
}

#[test]
fn test_verify_hash() {
    let digest = hash_message("mypassword123", HASH_KEY).unwrap();
    assert!(verify_hash("mypassword123", HASH_KEY, &digest));
    assert!(!verify_hash("mypassword124", HASH_KEY, &digest));
    assert!(!verify_hash("mypassword123", "other-key", &digest));
    assert!(!verify_hash("mypassword123", HASH_KEY, "%%% not a digest %%%"));
    assert!(!verify_hash("mypassword123", "", &digest));
}

#[test]
fn test_gcm_roundtrip_and_randomized_output() {
    let cipher = SymmetricCipher::new(
        SecretMaterial::new(SECRET, HASH_KEY).unwrap(),
        CipherMode::Gcm,
    );
    let first = cipher.encrypt("hello world").unwrap();
    let second = cipher.encrypt("hello world").unwrap();

    assert_ne!(first, second);
    assert_eq!(cipher.decrypt(&first).unwrap(), "hello world");
    assert_eq!(cipher.decrypt(&second).unwrap(), "hello world");
}

#[test]
fn test_gcm_detects_tampering() {
    let cipher = SymmetricCipher::new(
        SecretMaterial::new(SECRET, HASH_KEY).unwrap(),
        CipherMode::Gcm,
    );
    let sealed = cipher.encrypt("transfer 10 coins").unwrap();

    let mut raw = STANDARD.decode(&sealed).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    let tampered = STANDARD.encode(raw);

    assert!(matches!(cipher.decrypt(&tampered), Err(CoreError::Decryption)));
}

#[test]
fn test_gcm_rejects_wrong_key_and_ecb_input() {
    let right = SymmetricCipher::new(
        SecretMaterial::new(SECRET, HASH_KEY).unwrap(),
        CipherMode::Gcm,
    );
    let wrong = SymmetricCipher::new(
        SecretMaterial::new("wrong-secret", HASH_KEY).unwrap(),
        CipherMode::Gcm,
    );

    let sealed = right.encrypt("hello world").unwrap();
    assert!(matches!(wrong.decrypt(&sealed), Err(CoreError::Decryption)));

    let ecb = encrypt("hello world", SECRET, HASH_KEY).unwrap();
    assert!(matches!(right.decrypt(&ecb), Err(CoreError::Decryption)));
}

#[test]
fn test_ecb_cipher_matches_free_functions() {
    let cipher = SymmetricCipher::new(
        SecretMaterial::new(SECRET, HASH_KEY).unwrap(),
        CipherMode::Ecb,
    );
    assert_eq!(cipher.mode(), CipherMode::Ecb);
    assert_eq!(
        cipher.encrypt("hello world").unwrap(),
        encrypt("hello world", SECRET, HASH_KEY).unwrap()
    );
}
