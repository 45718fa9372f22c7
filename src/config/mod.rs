//! Batch configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default chunk size, entry naming rules)
//! - Per-batch option types and the progress callback signature
//! - Logging enums for embedding hosts

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BatchOptions, BatchProgress, LogFormat, LogLevel, ProgressCallback};
