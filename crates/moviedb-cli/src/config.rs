//! Application configuration.
//!
//! Locates and reads the TOML config holding the TMDB API key and request
//! defaults; [`API_KEY_ENV`] overrides the file's key.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `[tmdb] api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB client settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// `[tmdb]` table.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API key (v3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default response language (e.g. "ja-JP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Base URL override, mainly for proxies and test servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Config file location: `{dir}/config.toml` when `--dir` is given,
    /// otherwise `{home}/.config/moviedb/config.toml`.
    ///
    /// `home` is the value of `$HOME` and is only consulted without `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `dir` nor a non-empty `home` is available.
    pub fn path(dir: Option<&Path>, home: Option<OsString>) -> Result<PathBuf> {
        if let Some(dir) = dir {
            return Ok(dir.join(CONFIG_FILE));
        }
        let home = home
            .filter(|h| !h.is_empty())
            .context("cannot locate config.toml: HOME is not set and --dir was not given")?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("moviedb")
            .join(CONFIG_FILE))
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// API key to use: `env_key` (the value of [`API_KEY_ENV`]) wins over the file.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn api_key(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.tmdb
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}
