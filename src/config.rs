//! Configuration
//!
//! Resolution order: built-in defaults, then `config.json` in the platform
//! config directory, then `METAGEN_*` environment variables. CLI flags are
//! applied last by the caller.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MetagenError, Result};
use crate::tools::fetch::{RemoteScraper, TagSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use crate::tools::scrape::LocalScraper;

/// Where tags come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The hosted scraping service.
    #[default]
    Remote,
    /// Fetch and parse the page directly.
    Local,
}

impl std::str::FromStr for SourceKind {
    type Err = MetagenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(SourceKind::Remote),
            "local" => Ok(SourceKind::Local),
            other => Err(MetagenError::Config(format!("unknown source `{}`", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub source: SourceKind,
    pub activity_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            source: SourceKind::Remote,
            activity_log: true,
        }
    }
}

impl Config {
    /// Defaults, config file and environment, in that order.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "metagen", "metagen").map(|p| p.config_dir().join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| MetagenError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Override fields from `METAGEN_*` variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("METAGEN_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = lookup("METAGEN_TIMEOUT_MS") {
            self.timeout_ms = timeout.trim().parse().map_err(|_| {
                MetagenError::Config(format!("METAGEN_TIMEOUT_MS is not a number: {}", timeout))
            })?;
        }
        if let Some(source) = lookup("METAGEN_SOURCE") {
            self.source = source.parse()?;
        }
        if let Some(flag) = lookup("METAGEN_ACTIVITY_LOG") {
            self.activity_log = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }
        Ok(())
    }

    /// Build the configured tag source.
    pub fn tag_source(&self) -> Result<Box<dyn TagSource>> {
        Ok(match self.source {
            SourceKind::Remote => Box::new(RemoteScraper::new(self.endpoint.clone(), self.timeout_ms)?),
            SourceKind::Local => Box::new(LocalScraper::new(self.timeout_ms)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn temp_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_point_at_hosted_service() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.source, SourceKind::Remote);
        assert!(config.activity_log);
    }

    #[test]
    fn file_overrides_defaults_and_keeps_missing_fields() {
        let file = temp_config(r#"{"endpoint": "http://localhost:8080", "source": "local"}"#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.source, SourceKind::Local);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn bad_file_is_a_config_error() {
        let file = temp_config("{ not json");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MetagenError::Config(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let file = temp_config(r#"{"endpoint": "http://from-file", "timeout_ms": 100}"#);
        let mut config = Config::from_file(file.path()).unwrap();
        config
            .apply_env(env(&[
                ("METAGEN_ENDPOINT", "http://from-env"),
                ("METAGEN_SOURCE", "LOCAL"),
                ("METAGEN_ACTIVITY_LOG", "off"),
            ]))
            .unwrap();
        assert_eq!(config.endpoint, "http://from-env");
        assert_eq!(config.timeout_ms, 100);
        assert_eq!(config.source, SourceKind::Local);
        assert!(!config.activity_log);
    }

    #[test]
    fn env_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config
            .apply_env(env(&[("METAGEN_TIMEOUT_MS", "soon")]))
            .is_err());
        assert!(config.apply_env(env(&[("METAGEN_SOURCE", "ftp")])).is_err());
    }

    #[test]
    fn builds_matching_source() {
        let mut config = Config::default();
        assert_eq!(config.tag_source().unwrap().name(), "remote");
        config.source = SourceKind::Local;
        assert_eq!(config.tag_source().unwrap().name(), "local");
    }
}
