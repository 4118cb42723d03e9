//! Path resolution for DocIntel configuration files.
//!
//! ```text
//! ~/.config/docintel/      # Config directory (platform default via `dirs`)
//! └── config.toml          # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct DocIntelPaths;

impl DocIntelPaths {
    const APP_DIR: &'static str = "docintel";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the DocIntel configuration directory (e.g. `~/.config/docintel/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        // Headless CI may have no config dir at all.
        if let Ok(file) = DocIntelPaths::config_file() {
            assert!(file.ends_with("docintel/config.toml"));
        }
    }
}
