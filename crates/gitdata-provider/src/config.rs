//! Provider configuration

use std::fs;
use std::path::Path;

use gitdata_core::StatusOptions;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GITDATA_CONFIG";

/// Default log filter when neither `RUST_LOG` nor `log_filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "gitdata_provider=info";

/// Settings shared by every read the provider performs.
///
/// ```toml
/// include_untracked = true
/// include_ignored = false
/// log_filter = "gitdata_provider=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    pub include_untracked: bool,
    pub include_ignored: bool,
    pub log_filter: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        let status = StatusOptions::default();
        Self {
            include_untracked: status.include_untracked,
            include_ignored: status.include_ignored,
            log_filter: None,
        }
    }
}

impl ProviderConfig {
    /// Load from `path`, or use defaults when no path is given.
    ///
    /// A path that was given but cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded provider config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn status_options(&self) -> StatusOptions {
        StatusOptions {
            include_untracked: self.include_untracked,
            include_ignored: self.include_ignored,
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_status_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.status_options(), StatusOptions::default());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ProviderConfig::from_toml("include_ignored = true\n").unwrap();
        assert!(config.include_ignored);
        assert!(config.include_untracked);
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ProviderConfig::from_toml("include_everything = true\n").is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(ProviderConfig::load(None).unwrap(), ProviderConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gitdata.toml");
        fs::write(
            &path,
            "include_untracked = false\nlog_filter = \"gitdata_provider=debug\"\n",
        )
        .unwrap();

        let config = ProviderConfig::load(Some(&path)).unwrap();
        assert!(!config.include_untracked);
        assert_eq!(config.log_filter(), "gitdata_provider=debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = ProviderConfig::load(Some(&temp.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "include_ignored = \"sometimes\"\n").unwrap();

        let err = ProviderConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
