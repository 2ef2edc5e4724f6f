//! User settings (`~/.config/playlog/settings.toml`).
//!
//! Every field has a default, so a missing file, or a file that only sets a
//! few keys, is valid. Command-line flags override whatever is loaded here.

use std::path::{Path, PathBuf};

use playlog_catalog::JsonStyle;
use playlog_merge::DEFAULT_URL_PREFERENCE;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/playlog/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("playlog").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Root of the `games-raw`, `manual` and `games-processed` directories.
    pub data_dir: PathBuf,
    /// Platforms whose store url is preferred as the display url, in order.
    pub url_preference: Vec<String>,
    /// Write indented JSON instead of compact.
    pub pretty_json: bool,
    /// Platform snapshot file names under `games-raw`, merged in this order.
    pub platform_files: Vec<String>,
    /// Raw GOG snapshot file name under `games-raw`.
    pub gog_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            url_preference: DEFAULT_URL_PREFERENCE.iter().map(|p| p.to_string()).collect(),
            pretty_json: false,
            platform_files: vec![
                "steam-games.json".to_string(),
                "psn-games-uk.json".to_string(),
                "psn-games-us.json".to_string(),
                "xbox-games.json".to_string(),
            ],
            gog_file: "gog-games-raw.json".to_string(),
        }
    }
}

impl Settings {
    /// Load from [`settings_path`].
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(CliError::config(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub(crate) fn json_style(&self) -> JsonStyle {
        if self.pretty_json {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
