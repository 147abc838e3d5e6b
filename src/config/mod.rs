// src/config/mod.rs
//! Configuration system for textcrypt
//!
//! TOML file + env overrides. Loading is explicit: callers get a `Config`
//! value back and pass what they need to the services, nothing is global.

pub use app::{load, AuthConfig, Config, EncryptionConfig, KeyEntry, SymmetricConfig};

mod app;
mod defaults;
