// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # eonn-observability
//!
//! Unified logging for EONN binaries, with per-crate debug flag support.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging`] once at startup.
//!
//! ## Features
//! - `file-logging`: JSON log file per run in a timestamped folder

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known EONN crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "eonn",
    "eonn-neural",
    "eonn-evolutionary",
    "eonn-config",
];
