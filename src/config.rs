//! Overlay configuration.
//!
//! Lives in a TOML file managed by the host's config directory. Loading
//! never fails the game: a missing or malformed file logs a warning and
//! falls back to defaults.

use serde::{Deserialize, Serialize};
use stashtrack_core::GameId;
use std::{fs, path::Path};
use thiserror::Error;
use tracing::warn;

/// Default location of the config file, relative to the game directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/stashtrack.toml";

/// Errors emitted when reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wrap IO errors touching the config file.
    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap TOML parsing issues.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Wrap TOML serialization issues.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Grid and search-field behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Requested grid columns (clamped to the supported range on open).
    pub grid_width: usize,
    /// Requested grid rows (clamped to the supported range on open).
    pub grid_height: usize,
    /// Focus the search field when the overlay opens.
    pub autofocus_search: bool,
    /// Offer completion suggestions under the search field.
    pub show_autocomplete: bool,
    /// Most suggestions shown at once.
    pub autocomplete_limit: usize,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            grid_width: 9,
            grid_height: 6,
            autofocus_search: true,
            show_autocomplete: true,
            autocomplete_limit: 8,
        }
    }
}

/// Everything the overlay persists outside the memory banks themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Grid and search-field behaviour.
    pub gui: GuiConfig,
    /// Preferred location-tab order; locations not listed follow in the
    /// order they were first remembered.
    pub location_tabs: Vec<GameId>,
}

impl OverlayConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => match Self::from_toml_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    warn!(%err, path = %path.display(), "invalid overlay config, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!(%err, path = %path.display(), "unreadable overlay config, using defaults");
                Self::default()
            }
        }
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
