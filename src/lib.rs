//! docbatch: batch rendering of exam documents into a single ZIP archive.
//!
//! This library takes a homogeneous list of document records (certificates,
//! admission cards, or transcripts), renders each record to its binary
//! document through an injected rendering function, and packs every
//! successfully rendered document into one compressed archive. Rendering
//! runs with bounded concurrency: records are partitioned into fixed-size
//! chunks, a chunk's members render concurrently, and the next chunk starts
//! only after the previous one has fully settled.
//!
//! Per-item render failures never abort the batch; they are collected as
//! structured errors in the outcome so callers can return a partial archive
//! alongside a failure report.
//!
//! # Example
//!
//! ```no_run
//! use docbatch::{process_certificates, BatchOptions, CertificateRecord};
//!
//! # async fn render_certificate(record: CertificateRecord) -> anyhow::Result<Vec<u8>> {
//! #     Ok(record.student_id.into_bytes())
//! # }
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let records: Vec<CertificateRecord> = Vec::new();
//! let outcome = process_certificates(records, render_certificate, BatchOptions::default()).await?;
//! println!(
//!     "{} succeeded, {} failed",
//!     outcome.success_count, outcome.failure_count
//! );
//! if let Some(archive) = outcome.archive {
//!     std::fs::write("certificates.zip", archive)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The processing functions are async and require a Tokio runtime (or any
//! executor able to drive `futures`-based joins). Use `#[tokio::main]` in
//! your application or call them from an existing async context.

#![warn(missing_docs)]

mod archive;
mod batch;
pub mod config;
mod error_handling;
pub mod initialization;
mod naming;
mod records;

// Re-export public API
pub use archive::ArchiveBuilder;
pub use batch::{
    process_admission_cards, process_batch, process_certificates, process_transcripts,
    BatchOutcome,
};
pub use config::{BatchOptions, BatchProgress, LogFormat, LogLevel, ProgressCallback};
pub use error_handling::{ArchiveError, BatchError, InitializationError, ItemError};
pub use naming::{entry_name, sanitize_display_name, BatchDocument, DocumentKind};
pub use records::{AdmissionCardRecord, CertificateRecord, TranscriptEntry, TranscriptRecord};
