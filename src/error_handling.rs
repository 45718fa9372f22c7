//! Error types for batch processing.
//!
//! Two very different failure classes flow through a batch:
//!
//! - **Per-item render failures** are recovered locally and become
//!   [`ItemError`] data in the outcome. They never abort the batch.
//! - **Structural failures** (invalid configuration, archive assembly)
//!   propagate as [`BatchError`] so callers can never confuse "no items
//!   succeeded" with "archive assembly broke".

use log::SetLoggerError;
use serde::Serialize;
use thiserror::Error;
use zip::result::ZipError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Structural failure of a whole batch.
///
/// Per-item render failures never surface here; they are collected in
/// [`crate::BatchOutcome::errors`] instead.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The configured chunk size was zero. Rejected before any render runs.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// Archive assembly failed. Fatal for the batch.
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Failure while assembling or finalizing the ZIP archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Could not open a new entry in the archive.
    #[error("failed to start archive entry {name:?}: {source}")]
    Entry {
        /// Entry name that failed to open
        name: String,
        /// Underlying ZIP error
        #[source]
        source: ZipError,
    },

    /// Could not write a rendered document into its entry.
    #[error("failed to write archive entry {name:?}: {source}")]
    EntryWrite {
        /// Entry name that failed to write
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Could not finalize the archive into a byte stream.
    #[error("failed to finalize archive: {0}")]
    Finalize(#[from] ZipError),
}

/// A single record whose render failed.
///
/// Ordered by original input position in [`crate::BatchOutcome::errors`],
/// regardless of the order renders completed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemError {
    /// Identifier of the failed record (the student id)
    pub item_id: String,
    /// Human-readable failure reason from the renderer
    pub message: String,
}
