//! pyboot configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PybootConfig {
    /// Virtual environment directory, relative to the working directory
    #[serde(default = "default_env_dir")]
    pub env_dir: PathBuf,

    /// Requirements manifest, relative to the working directory
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Remove an environment created by this run if a later step fails
    #[serde(default)]
    pub clean_on_failure: bool,
}

fn default_env_dir() -> PathBuf {
    PathBuf::from("venv")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("requirements.txt")
}

impl Default for PybootConfig {
    fn default() -> Self {
        Self {
            env_dir: default_env_dir(),
            manifest: default_manifest(),
            clean_on_failure: false,
        }
    }
}

impl PybootConfig {
    /// Get the config file path: ~/.config/cli-programs/pyboot.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("pyboot.toml"))
    }

    /// Load config from the default location, returning defaults if the file
    /// doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, returning defaults if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PybootConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PybootConfig::default();
        assert_eq!(config.env_dir, PathBuf::from("venv"));
        assert_eq!(config.manifest, PathBuf::from("requirements.txt"));
        assert!(!config.clean_on_failure);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = PybootConfig::load_from(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.env_dir, PathBuf::from("venv"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pyboot.toml");
        fs::write(&path, "env_dir = \".venv\"\n").unwrap();

        let config = PybootConfig::load_from(&path).unwrap();
        assert_eq!(config.env_dir, PathBuf::from(".venv"));
        assert_eq!(config.manifest, PathBuf::from("requirements.txt"));
        assert!(!config.clean_on_failure);
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pyboot.toml");
        fs::write(
            &path,
            "env_dir = \"env\"\nmanifest = \"deps.txt\"\nclean_on_failure = true\n",
        )
        .unwrap();

        let config = PybootConfig::load_from(&path).unwrap();
        assert_eq!(config.env_dir, PathBuf::from("env"));
        assert_eq!(config.manifest, PathBuf::from("deps.txt"));
        assert!(config.clean_on_failure);
    }
}
