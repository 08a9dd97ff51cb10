//! `shellfetch urls <version>` – resolve URLs without downloading.

use anyhow::Result;
use shellfetch_core::config::FetchConfig;
use shellfetch_core::release::ReleaseSource;

pub fn run_urls(cfg: &FetchConfig, version: &str) -> Result<()> {
    let source = ReleaseSource::for_version(version, cfg)?;
    println!("primary:  {}", source.primary_url);
    println!("fallback: {}", source.fallback_url);
    println!("file:     {}", source.archive_name);
    Ok(())
}
