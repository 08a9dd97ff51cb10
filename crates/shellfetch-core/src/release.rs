//! Release source modeling: archive filename and candidate URLs.
//!
//! A shell version maps to one deterministic archive name and two download
//! locations that share path and filename, differing only in host.

use crate::config::FetchConfig;
use url::Url;

/// Path under a release host where versioned archives are published.
const RELEASE_PATH: &str = "webapps/ui-releases";

/// Archive filename prefix and extension: `apps-<version>.tgz`.
const ARCHIVE_PREFIX: &str = "apps-";
const ARCHIVE_EXT: &str = ".tgz";

/// Local archive filename for a shell version.
///
/// The version is interpolated as-is, never parsed: a malformed version
/// produces a URL that will 404, not an error here.
///
/// # Examples
///
/// - `archive_filename("1005.0.0")` → `"apps-1005.0.0.tgz"`
pub fn archive_filename(version: &str) -> String {
    format!("{ARCHIVE_PREFIX}{version}{ARCHIVE_EXT}")
}

/// The two candidate download locations for one version, tried in order.
#[derive(Debug, Clone)]
pub struct ReleaseSource {
    /// Production release host URL.
    pub primary_url: String,
    /// Staging mirror URL, tried once when the primary fails.
    pub fallback_url: String,
    /// Deterministic local filename; also the last path segment of both URLs.
    pub archive_name: String,
}

impl ReleaseSource {
    /// Resolves both candidate URLs for `version` from the configured base URLs.
    pub fn for_version(version: &str, config: &FetchConfig) -> Result<Self, url::ParseError> {
        let archive_name = archive_filename(version);
        Ok(ReleaseSource {
            primary_url: join_release_url(&config.primary_base_url, &archive_name)?,
            fallback_url: join_release_url(&config.fallback_base_url, &archive_name)?,
            archive_name,
        })
    }
}

/// Joins `<base>/webapps/ui-releases/<archive_name>`, tolerating a base URL
/// with or without a trailing slash.
fn join_release_url(base: &str, archive_name: &str) -> Result<String, url::ParseError> {
    let mut base = Url::parse(base)?;
    // Url::join drops the last path segment unless the base path ends in '/'.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("{RELEASE_PATH}/{archive_name}"))?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_filename_shape() {
        assert_eq!(archive_filename("1005.0.0"), "apps-1005.0.0.tgz");
        assert_eq!(archive_filename("10.4.0-beta"), "apps-10.4.0-beta.tgz");
    }

    #[test]
    fn default_config_urls_differ_only_in_host() {
        let cfg = FetchConfig::default();
        let src = ReleaseSource::for_version("1005.0.0", &cfg).unwrap();
        assert_eq!(
            src.primary_url,
            "https://resources.cumulocity.com/webapps/ui-releases/apps-1005.0.0.tgz"
        );
        assert_eq!(
            src.fallback_url,
            "https://staging-resources.cumulocity.com/webapps/ui-releases/apps-1005.0.0.tgz"
        );
        assert_eq!(src.archive_name, "apps-1005.0.0.tgz");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let a = join_release_url("http://127.0.0.1:8080", "apps-1.tgz").unwrap();
        let b = join_release_url("http://127.0.0.1:8080/", "apps-1.tgz").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "http://127.0.0.1:8080/webapps/ui-releases/apps-1.tgz");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let cfg = FetchConfig {
            primary_base_url: "not a url".to_string(),
            ..FetchConfig::default()
        };
        assert!(ReleaseSource::for_version("1.0.0", &cfg).is_err());
    }
}
