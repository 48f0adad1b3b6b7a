// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colorbook — Core types, processing settings, and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod settings;
pub mod types;

pub use config::AppConfig;
pub use error::{ColorbookError, ErrorKind};
pub use settings::{LineArtSettings, ProcessingConfig, Symmetry};
pub use types::*;
