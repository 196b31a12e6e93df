//! Configuration management for lectern.
//!
//! Loads configuration from ${LECTERN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for lectern configuration and data directories.
    //!
    //! LECTERN_HOME resolution order:
    //! 1. LECTERN_HOME environment variable (if set)
    //! 2. ~/.config/lectern (default)

    use std::path::PathBuf;

    /// Returns the lectern home directory.
    ///
    /// Checks LECTERN_HOME env var first, falls back to ~/.config/lectern
    ///
    /// # Panics
    /// Panics if neither LECTERN_HOME nor the home directory can be determined.
    pub fn lectern_home() -> PathBuf {
        if let Ok(home) = std::env::var("LECTERN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("lectern"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        lectern_home().join("config.toml")
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> PathBuf {
        lectern_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to capture mouse input for drag and swipe gestures.
    pub mouse: bool,

    /// Horizontal travel, in terminal columns, after which releasing a
    /// sideways drag dismisses the card.
    pub swipe_threshold: u16,

    /// Whether to show key hints in the status line.
    pub show_hints: bool,
}

impl Config {
    const DEFAULT_SWIPE_THRESHOLD: u16 = 8;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The swipe threshold actually used by gesture handling.
    ///
    /// A configured value of 0 would make every sideways twitch a
    /// dismissal, so it is clamped up to 1.
    pub fn effective_swipe_threshold(&self) -> u16 {
        self.swipe_threshold.max(1)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mouse: true,
            swipe_threshold: Self::DEFAULT_SWIPE_THRESHOLD,
            show_hints: true,
        }
    }
}
