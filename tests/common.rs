// tests/common.rs
//! Shared test utilities: logging setup and a reusable RSA key pair

#![allow(dead_code)] // each test binary uses a different subset

use std::path::Path;
use std::sync::OnceLock;

use tempfile::TempDir;
use textcrypt::{create_key_files, KeyManager, KeyPaths};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bits for throwaway test keys; 4096 is only generated where the test is about it
pub const TEST_KEY_BITS: usize = 2048;

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub struct TestKeys {
    pub dir: TempDir,
    pub paths: KeyPaths,
}

/// One 2048-bit pair per test binary, generated on first use
pub fn shared_keys() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        let dir = tempfile::tempdir().expect("temp key dir");
        let paths = create_key_files(dir.path(), TEST_KEY_BITS).expect("generate test keys");
        TestKeys { dir, paths }
    })
}

pub fn shared_manager() -> KeyManager {
    let keys = shared_keys();
    KeyManager::load(&keys.paths.private_key, &keys.paths.public_key).expect("load test keys")
}

pub fn fresh_keys(dir: &Path) -> KeyPaths {
    create_key_files(dir, TEST_KEY_BITS).expect("generate keys")
}
