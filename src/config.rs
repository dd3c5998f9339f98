//! Platform-specific paths and the optional user configuration file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::jetbrains::product::ProductSpec;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "JETBRAINS_PROJECTS_CONFIG";

/// Get the configuration directory a vendor keeps its IDE settings in
/// - macOS: ~/Library/Application Support/<vendor>/
/// - Linux and other Unix: ~/.config/<vendor>/
/// - Windows: %APPDATA%/<vendor>/
pub fn vendor_config_dir(vendor: &str) -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join("Library").join("Application Support").join(vendor))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let config = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config.join(vendor))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = dirs::config_dir().context("Could not determine AppData directory")?;
        Ok(appdata.join(vendor))
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// User configuration, read from TOML
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Replaces the JetBrains preferences directory
    #[serde(default)]
    pub preferences_root: Option<String>,

    /// Extra products, or overrides for built-in ones, keyed by keyword
    #[serde(default)]
    pub products: BTreeMap<String, ProductSpec>,
}

impl Config {
    pub fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {:#}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse: {}", path.display()))
    }

    /// The JetBrains preferences root after applying `preferences_root`
    pub fn preferences_root_override(&self) -> Option<PathBuf> {
        self.preferences_root.as_deref().map(expand_tilde)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 0. Explicit override
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            paths.push(PathBuf::from(explicit));
        }

        // 1. XDG config: ~/.config/jetbrains-projects/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("jetbrains-projects")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("jetbrains-projects").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.jetbrains-projects.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".jetbrains-projects.toml"));
        }

        paths
    }
}
