//
//  freshdesk-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module handles loading, saving, and accessing the CLI's settings,
//! stored as TOML in a platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/fdesk/config.toml`
//! - **macOS**: `~/Library/Application Support/fdesk/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\fdesk\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! url = "https://mycompany.freshdesk.com"
//! output = "table"
//! ```
//!
//! The API key is never written here; it lives in the system keyring.
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["url", "output"];

/// Global configuration container for the CLI.
///
/// # Examples
///
/// ```rust
/// use freshdesk_cli::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.core.output, "table");
/// assert!(config.core.url.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Freshdesk base URL, e.g. `https://mycompany.freshdesk.com`
    #[serde(default)]
    pub url: Option<String>,

    /// Default output format: `table` or `json`
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            output: default_output(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the configuration file.
    ///
    /// `FDESK_CONFIG_DIR` overrides the platform directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("FDESK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Every settable key, in display order.
    pub fn keys() -> &'static [&'static str] {
        CONFIG_KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "url" => self.core.url.clone(),
            "output" => Some(self.core.output.clone()),
            _ => None,
        }
    }

    /// Sets `key` to `value`, validating where the key has a fixed domain.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "url" => {
                self.core.url = Some(value);
            }
            "output" => {
                if value != "table" && value != "json" {
                    bail!("Invalid output format '{}': expected 'table' or 'json'", value);
                }
                self.core.output = value;
            }
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Clears `key`, returning it to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "url" => self.core.url = None,
            "output" => self.core.output = default_output(),
            _ => bail!("Unknown configuration key '{}'", key),
        }
        Ok(())
    }
}
