//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, else the platform config dir)
//! 3. Built-in defaults (always present)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values seeded into the `new` prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub organization: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the explicit `--config` path, else the
    /// platform default location.  A missing file yields the defaults; an
    /// explicit path that does not exist is an error.
    pub fn load(explicit: Option<&PathBuf>) -> CliResult<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(CliError::ConfigError {
                        message: format!("config file not found: {}", p.display()),
                    });
                }
                p.clone()
            }
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let raw = fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}: {e}", path.display()),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}: {e}", path.display()),
        })
    }

    /// `~/.config/girder/girder.toml` (platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "girder")
            .map(|dirs| dirs.config_dir().join("girder.toml"))
    }
}
