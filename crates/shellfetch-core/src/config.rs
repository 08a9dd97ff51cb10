use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default production release host.
const DEFAULT_PRIMARY_BASE_URL: &str = "https://resources.cumulocity.com";

/// Default staging mirror, tried once when the production host fails.
const DEFAULT_FALLBACK_BASE_URL: &str = "https://staging-resources.cumulocity.com";

/// Global configuration loaded from `~/.config/shellfetch/config.toml`.
///
/// Only the base URLs are configurable; timeouts and the single-fallback
/// policy are fixed in the transfer layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the production release host.
    pub primary_base_url: String,
    /// Base URL of the staging mirror.
    pub fallback_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            primary_base_url: DEFAULT_PRIMARY_BASE_URL.to_string(),
            fallback_base_url: DEFAULT_FALLBACK_BASE_URL.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shellfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
