//! Configuration for the Tabula console.
//!
//! Loaded from `~/.tabula/config.toml`. Every section and key is optional; the
//! getters on [`TabulaConfig`] fill in defaults.
//!
//! ```toml
//! [ui]
//! menu_title = "Edit"
//! prompt_suffix = ": "
//!
//! [sheet]
//! rows = 20
//! columns = 10
//!
//! [log]
//! filter = "info"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

pub const DEFAULT_MENU_TITLE: &str = "Edit";
pub const DEFAULT_PROMPT_SUFFIX: &str = ": ";
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 10;
pub const MAX_ROWS: usize = 1_048_576;
pub const MAX_COLUMNS: usize = 16_384;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabulaConfig {
    pub ui: Option<UiConfig>,
    pub sheet: Option<SheetConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Title shown above the command menu.
    pub menu_title: Option<String>,
    /// Written after every field prompt.
    pub prompt_suffix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetConfig {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl TabulaConfig {
    /// Load the user config. `Ok(None)` when there is no home directory or no
    /// config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn menu_title(&self) -> &str {
        self.ui
            .as_ref()
            .and_then(|ui| ui.menu_title.as_deref())
            .unwrap_or(DEFAULT_MENU_TITLE)
    }

    #[must_use]
    pub fn prompt_suffix(&self) -> &str {
        self.ui
            .as_ref()
            .and_then(|ui| ui.prompt_suffix.as_deref())
            .unwrap_or(DEFAULT_PROMPT_SUFFIX)
    }

    /// Sheet size as `(rows, columns)`, each clamped to `1..=MAX_ROWS` and
    /// `1..=MAX_COLUMNS`.
    #[must_use]
    pub fn sheet_size(&self) -> (usize, usize) {
        let sheet = self.sheet.as_ref();
        let rows = sheet.and_then(|s| s.rows).unwrap_or(DEFAULT_ROWS);
        let columns = sheet.and_then(|s| s.columns).unwrap_or(DEFAULT_COLUMNS);
        (rows.clamp(1, MAX_ROWS), columns.clamp(1, MAX_COLUMNS))
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.filter.as_deref())
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tabula").join("config.toml"))
}
