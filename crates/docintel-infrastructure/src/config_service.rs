//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`. A missing file is not an
//! error: every section falls back to its defaults.

use crate::paths::DocIntelPaths;
use docintel_core::DocIntelError;
use docintel_core::config::RootConfig;
use docintel_core::error::Result;
use std::path::{Path, PathBuf};

/// Loads and saves [`RootConfig`] files.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service bound to an explicit config file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a service bound to the platform default config file.
    pub fn with_default_path() -> Result<Self> {
        let path = DocIntelPaths::config_file().map_err(|e| DocIntelError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, using defaults when the file does not exist.
    pub async fn load(&self) -> Result<RootConfig> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "Config file missing, using defaults");
            return Ok(RootConfig::default());
        }
        Self::load_from_path(&self.path).await
    }

    /// Parses the file at `path`. Unlike [`ConfigService::load`], a missing
    /// file is an `Io` error.
    pub async fn load_from_path(path: &Path) -> Result<RootConfig> {
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<RootConfig> {
        Ok(toml::from_str(content)?)
    }

    /// Writes `config` to the bound path, creating parent directories.
    pub async fn save(&self, config: &RootConfig) -> Result<()> {
        Self::save_to_path(&self.path, config).await
    }

    pub async fn save_to_path(path: &Path, config: &RootConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(config)?;
        tokio::fs::write(path, content).await?;
        tracing::info!(path = %path.display(), "Saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(dir.path().join("config.toml"));
        assert_eq!(service.load().await.unwrap(), RootConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigService::load_from_path(&dir.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocIntelError::Io { .. }));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(dir.path().join("nested").join("config.toml"));

        let mut config = RootConfig::default();
        config.latency.upload_ms = 5;
        config.random.seed = Some(7);
        config.sample_data.enabled = false;
        service.save(&config).await.unwrap();

        assert_eq!(service.load().await.unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ConfigService::parse("[latency]\nchat_reply_ms = 10\n").unwrap();
        assert_eq!(config.latency.chat_reply_ms, 10);
        assert_eq!(config.latency.upload_ms, 2000);
        assert!(config.sample_data.enabled);
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let err = ConfigService::parse("[latency\n").unwrap_err();
        assert!(err.is_serialization());
    }
}
