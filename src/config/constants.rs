//! Configuration constants.
//!
//! Defaults and fixed values used throughout the batch processor.

/// Default number of documents rendered concurrently per chunk.
///
/// Chunking bounds how many rendered documents are held in memory at once.
/// A batch of thousands of transcripts rendered fully concurrently could
/// exhaust memory; 10 keeps the in-flight footprint small while still
/// overlapping renderer latency.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// File extension for every archive entry.
///
/// The renderer is a black box to this crate, but every variant it renders
/// today produces a PDF, so entry names carry a fixed extension.
pub const ARCHIVE_ENTRY_EXTENSION: &str = "pdf";

/// Characters stripped from student display names when building entry names.
///
/// Anything outside this class is replaced with an underscore so entry names
/// stay filesystem-safe when callers extract the archive.
pub const ENTRY_NAME_SANITIZER: &str = r"[^a-zA-Z0-9]";
