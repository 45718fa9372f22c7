//! Batch document processing.
//!
//! One generic algorithm drives all three document variants: partition the
//! records into fixed-size chunks, render each chunk's members concurrently,
//! wait for the whole chunk to settle, fold successes into the archive and
//! failures into the error list, then move on. Chunk `i + 1` never starts
//! before chunk `i` has fully settled, which caps both peak concurrency and
//! the number of rendered documents held in memory at `chunk_size`.
//!
//! Per-item render failures are data, not exceptions: a failed render is
//! recorded against the record's student id and processing continues. Only
//! invalid configuration and archive assembly failures abort the batch.

use std::fmt;
use std::future::Future;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};

use crate::archive::ArchiveBuilder;
use crate::config::{BatchOptions, BatchProgress};
use crate::error_handling::{BatchError, ItemError};
use crate::naming::{entry_name, BatchDocument};
use crate::records::{AdmissionCardRecord, CertificateRecord, TranscriptRecord};

/// Result of one batch invocation.
///
/// Invariants: `success_count + failure_count` equals the input length,
/// `errors.len()` equals `failure_count`, and `archive` is `None` exactly
/// when no item succeeded (never a zero-entry container).
pub struct BatchOutcome {
    /// Finalized ZIP archive bytes, absent if zero items succeeded
    pub archive: Option<Vec<u8>>,
    /// Number of records rendered and packed into the archive
    pub success_count: usize,
    /// Number of records whose render failed
    pub failure_count: usize,
    /// Per-item failures, ordered by original input position
    pub errors: Vec<ItemError>,
    /// Identifier for this invocation (`batch_<timestamp_millis>`), for
    /// audit records and log correlation
    pub batch_id: String,
    /// Wall-clock duration of the invocation in seconds
    pub elapsed_seconds: f64,
}

impl fmt::Debug for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchOutcome")
            .field("archive_bytes", &self.archive.as_ref().map(Vec::len))
            .field("success_count", &self.success_count)
            .field("failure_count", &self.failure_count)
            .field("errors", &self.errors)
            .field("batch_id", &self.batch_id)
            .field("elapsed_seconds", &self.elapsed_seconds)
            .finish()
    }
}

/// Renders a batch of records into one ZIP archive with bounded concurrency.
///
/// Chunks are processed strictly in sequence; within a chunk every render
/// runs concurrently and the processor waits for all of them to settle
/// before touching the archive. The error list is therefore deterministic
/// for a fixed input regardless of completion order within a chunk.
///
/// The renderer is invoked exactly once per record, with no retries; hosts
/// that need timeouts wrap their renderer before passing it in, and the
/// processor treats a timeout like any other per-item failure.
///
/// # Arguments
///
/// * `records` - Same-variant records to render; an empty batch yields the
///   trivial outcome without invoking the renderer or the archive builder
/// * `render` - Per-record rendering function producing the document bytes
/// * `options` - Chunk size and optional progress callback
///
/// # Errors
///
/// Returns [`BatchError::InvalidChunkSize`] if `options.chunk_size` is zero
/// (checked before any render runs), or [`BatchError::Archive`] if archive
/// assembly fails. Per-item render failures are reported through
/// [`BatchOutcome::errors`], never through the error return.
pub async fn process_batch<R, F, Fut>(
    records: Vec<R>,
    render: F,
    options: BatchOptions,
) -> Result<BatchOutcome, BatchError>
where
    R: BatchDocument,
    F: Fn(R) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<u8>>>,
{
    if options.chunk_size == 0 {
        return Err(BatchError::InvalidChunkSize);
    }

    let started = Instant::now();
    let batch_id = format!("batch_{}", Utc::now().timestamp_millis());
    let total = records.len();

    if total == 0 {
        debug!("{batch_id}: empty batch, nothing to render");
        return Ok(BatchOutcome {
            archive: None,
            success_count: 0,
            failure_count: 0,
            errors: Vec::new(),
            batch_id,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        });
    }

    let chunk_count = total.div_ceil(options.chunk_size);
    info!(
        "{batch_id}: rendering {total} {} document(s) in {chunk_count} chunk(s) of up to {}",
        R::KIND,
        options.chunk_size
    );

    let mut builder = ArchiveBuilder::new();
    let mut errors: Vec<ItemError> = Vec::new();
    let mut success_count = 0usize;
    let mut processed = 0usize;

    for (chunk_index, chunk) in records.chunks(options.chunk_size).enumerate() {
        // join_all returns results in submission order, so successes land in
        // the archive and failures in the error list by input position, not
        // by completion order.
        let renders = chunk.iter().map(|record| {
            let name = entry_name(record);
            let id = record.item_id().to_owned();
            let document = render(record.clone());
            async move { (name, id, document.await) }
        });
        let settled = join_all(renders).await;

        for (name, id, result) in settled {
            match result {
                Ok(bytes) => {
                    builder.add_entry(&name, &bytes)?;
                    success_count += 1;
                }
                Err(e) => {
                    warn!("{batch_id}: failed to render document for {id}: {e:#}");
                    errors.push(ItemError {
                        item_id: id,
                        message: format!("{e:#}"),
                    });
                }
            }
        }

        processed += chunk.len();
        let elapsed = started.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            processed as f64 / elapsed
        } else {
            0.0
        };
        debug!(
            "{batch_id}: chunk {}/{chunk_count} settled ({processed}/{total} processed, \
             {success_count} ok, {} failed, ~{rate:.1} docs/sec)",
            chunk_index + 1,
            errors.len()
        );

        if let Some(on_progress) = options.on_progress.as_ref() {
            on_progress(BatchProgress {
                total,
                processed,
                successful: success_count,
                failed: errors.len(),
            });
        }
    }

    let failure_count = errors.len();
    // A batch where nothing rendered must yield an absent archive, not an
    // empty container the caller would offer for download.
    let archive = if success_count == 0 {
        None
    } else {
        Some(builder.finalize()?)
    };

    let elapsed_seconds = started.elapsed().as_secs_f64();
    info!(
        "{batch_id}: finished in {elapsed_seconds:.2}s ({success_count} succeeded, \
         {failure_count} failed)"
    );

    Ok(BatchOutcome {
        archive,
        success_count,
        failure_count,
        errors,
        batch_id,
        elapsed_seconds,
    })
}

/// Renders a batch of certificates into one ZIP archive.
///
/// Entry names are keyed by exam code. See [`process_batch`] for the shared
/// contract.
pub async fn process_certificates<F, Fut>(
    records: Vec<CertificateRecord>,
    render: F,
    options: BatchOptions,
) -> Result<BatchOutcome, BatchError>
where
    F: Fn(CertificateRecord) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<u8>>>,
{
    process_batch(records, render, options).await
}

/// Renders a batch of admission cards into one ZIP archive.
///
/// Entry names are keyed by exam code. See [`process_batch`] for the shared
/// contract.
pub async fn process_admission_cards<F, Fut>(
    records: Vec<AdmissionCardRecord>,
    render: F,
    options: BatchOptions,
) -> Result<BatchOutcome, BatchError>
where
    F: Fn(AdmissionCardRecord) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<u8>>>,
{
    process_batch(records, render, options).await
}

/// Renders a batch of transcripts into one ZIP archive.
///
/// Entry names are keyed by student id. See [`process_batch`] for the shared
/// contract.
pub async fn process_transcripts<F, Fut>(
    records: Vec<TranscriptRecord>,
    render: F,
    options: BatchOptions,
) -> Result<BatchOutcome, BatchError>
where
    F: Fn(TranscriptRecord) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<u8>>>,
{
    process_batch(records, render, options).await
}
