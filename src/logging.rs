// src/logging.rs
//! Subscriber setup for applications embedding textcrypt
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
/// Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
