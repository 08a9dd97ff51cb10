//! Blocking transfer with a single staging fallback.
//!
//! One HTTP GET per attempt, streamed straight to the target path. An
//! attempt fails on a transport error, a non-2xx status, or a local write
//! error; the first failure falls back once, the second propagates.

use crate::storage::ArchiveWriter;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// Failure of a single transfer attempt.
///
/// The fallback policy is coarse on purpose: every variant is handled the
/// same way. A 404 and a connection reset both mean "try the other host".
#[derive(Debug, Error)]
pub enum TransferError {
    /// libcurl reported a transport error (DNS, connect, timeout, reset).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local write handle failed (disk full, permission denied).
    #[error("write stream: {0}")]
    Stream(#[source] io::Error),
}

/// Downloads `url` into `writer` with a single streaming GET.
/// Returns the number of bytes written.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_archive(url: &str, writer: &ArchiveWriter) -> Result<u64, TransferError> {
    let offset = Arc::new(AtomicU64::new(0));
    // A write failure aborts the transfer, which makes libcurl report its own
    // write error; the original io error is parked here so the attempt has
    // one unified outcome instead of two competing failure signals.
    let write_error: Arc<Mutex<Option<io::Error>>> = Arc::new(Mutex::new(None));

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        let offset_cb = Arc::clone(&offset);
        let write_error_cb = Arc::clone(&write_error);
        let writer_cb = writer.clone();
        transfer.write_function(move |data| {
            let off = offset_cb.fetch_add(data.len() as u64, Ordering::Relaxed);
            match writer_cb.write_at(off, data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    *write_error_cb.lock().unwrap() = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        if let Err(e) = transfer.perform() {
            if let Some(io_err) = write_error.lock().unwrap().take() {
                return Err(TransferError::Stream(io_err));
            }
            return Err(TransferError::Curl(e));
        }
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransferError::Http(code));
    }

    writer.sync().map_err(TransferError::Stream)?;
    Ok(offset.load(Ordering::Relaxed))
}

/// Downloads `primary_url` to `target`, retrying once against `fallback_url`
/// on any failure. Each attempt opens a fresh truncating handle, so a failed
/// primary attempt's partial bytes are overwritten, never appended to. The
/// fallback attempt's failure propagates; there is no third attempt.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn transfer_with_fallback(
    primary_url: &str,
    fallback_url: &str,
    target: &Path,
) -> Result<(), TransferError> {
    // The writer is scoped to one attempt so the handle closes on every exit
    // path before the next attempt reopens the path.
    let attempt = |url: &str| -> Result<u64, TransferError> {
        let writer = ArchiveWriter::create(target).map_err(TransferError::Stream)?;
        fetch_archive(url, &writer)
    };

    match attempt(primary_url) {
        Ok(bytes) => {
            tracing::debug!(bytes, url = primary_url, "primary transfer complete");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(
                "failed to download from {}: {}; attempting fallback URL {}",
                primary_url,
                e,
                fallback_url
            );
            let bytes = attempt(fallback_url)?;
            tracing::debug!(bytes, url = fallback_url, "fallback transfer complete");
            Ok(())
        }
    }
}
