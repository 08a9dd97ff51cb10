//! `shellfetch fetch <version>` – download the archive, fallback included.

use anyhow::Result;
use shellfetch_core::config::FetchConfig;
use shellfetch_core::fetcher;
use shellfetch_core::release::ReleaseSource;
use std::path::Path;

pub async fn run_fetch(cfg: &FetchConfig, version: &str, output_dir: &Path) -> Result<()> {
    // Both candidate URLs are announced before any attempt is made.
    let source = ReleaseSource::for_version(version, cfg)?;
    println!("Shell file url is: {}", source.primary_url);
    println!("Shell file fallback url is: {}", source.fallback_url);

    let path = fetcher::fetch_release(version, cfg, output_dir).await?;
    println!("File downloaded successfully.");
    println!("{}", path.display());
    Ok(())
}
