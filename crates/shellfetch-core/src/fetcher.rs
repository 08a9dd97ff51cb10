//! Fetch orchestration: resolve release URLs, run the transfer, verify the
//! archive landed on disk.

use crate::config::FetchConfig;
use crate::release::ReleaseSource;
use crate::transfer::{self, TransferError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a whole fetch.
///
/// The library never exits the process; the CLI (or any other caller)
/// decides whether this is fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A configured base URL did not parse.
    #[error("invalid base URL in config: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// Both the primary and the fallback attempt failed.
    #[error("download failed from {url} and fallback {fallback_url}: {source}")]
    Transfer {
        url: String,
        fallback_url: String,
        source: TransferError,
    },
    /// The transfer reported success but the archive is not on disk.
    #[error("downloaded file not found: {}", path.display())]
    MissingArchive { path: PathBuf },
    /// The blocking transfer task could not be joined.
    #[error("transfer task join: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// Filesystem probe failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Downloads the archive for `version` into `output_dir` and returns the
/// path of the downloaded file.
///
/// Tries the primary host first and the staging mirror once on any failure.
/// After the transfer reports success the target path is re-checked on
/// disk; a missing file is an error even though no attempt failed.
pub async fn fetch_release(
    version: &str,
    config: &FetchConfig,
    output_dir: &Path,
) -> Result<PathBuf, FetchError> {
    let source = ReleaseSource::for_version(version, config)?;
    tracing::info!("shell file url is: {}", source.primary_url);
    tracing::info!("shell file fallback url is: {}", source.fallback_url);

    let target = output_dir.join(&source.archive_name);

    tokio::task::spawn_blocking({
        let primary = source.primary_url.clone();
        let fallback = source.fallback_url.clone();
        let target = target.clone();
        move || transfer::transfer_with_fallback(&primary, &fallback, &target)
    })
    .await?
    .map_err(|e| FetchError::Transfer {
        url: source.primary_url,
        fallback_url: source.fallback_url,
        source: e,
    })?;

    verify_archive_present(&target).await?;
    tracing::info!("file downloaded successfully: {}", target.display());
    Ok(target)
}

/// Confirms the downloaded archive actually exists at `path`. Guards
/// against a transfer that completed without flushing anything to disk.
pub async fn verify_archive_present(path: &Path) -> Result<(), FetchError> {
    if tokio::fs::try_exists(path).await? {
        Ok(())
    } else {
        Err(FetchError::MissingArchive {
            path: path.to_path_buf(),
        })
    }
}
