//! Configuration types.
//!
//! This module defines the per-batch options struct, the progress snapshot
//! delivered to callers, and the logging enums used by embedding hosts.

use std::fmt;

use serde::Serialize;

use crate::config::constants::DEFAULT_CHUNK_SIZE;

/// Logging level for the embedding application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Snapshot of batch progress, delivered once per settled chunk.
///
/// `processed` is monotonically non-decreasing across calls, never exceeds
/// `total`, and equals `total` on the final call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BatchProgress {
    /// Total number of records in the batch
    pub total: usize,
    /// Records settled so far (successes plus failures)
    pub processed: usize,
    /// Records rendered and added to the archive so far
    pub successful: usize,
    /// Records whose render failed so far
    pub failed: usize,
}

/// Callback invoked after each chunk settles.
///
/// Route handlers typically forward these snapshots to a live-update channel
/// so operators can watch large batches complete.
pub type ProgressCallback = Box<dyn Fn(BatchProgress) + Send + Sync>;

/// Per-batch processing options.
///
/// # Examples
///
/// ```
/// use docbatch::BatchOptions;
///
/// let options = BatchOptions {
///     chunk_size: 25,
///     ..Default::default()
/// };
/// assert_eq!(options.chunk_size, 25);
/// ```
pub struct BatchOptions {
    /// Maximum number of renders in flight at any moment, and the unit of
    /// progress reporting. Must be greater than zero.
    pub chunk_size: usize,

    /// Optional progress callback, invoked once per settled chunk.
    pub on_progress: Option<ProgressCallback>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            on_progress: None,
        }
    }
}

impl fmt::Debug for BatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchOptions")
            .field("chunk_size", &self.chunk_size)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}
