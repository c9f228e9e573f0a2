// Configuration for the calculator engine and UI components
// Every field has a default, so a partial (or missing) config file is fine

use crate::theme::{ColorScheme, ThemeId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Display formatting
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Fractional digits kept when a result is shown (default 7)
    pub fraction_digits: usize,

    /// Rendered length at which the display scrolls horizontally (default 14)
    pub wide_threshold: usize,

    /// Group thousands in results shown after equals (default off)
    pub grouping: bool,
    pub group_separator: String,
    pub decimal_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fraction_digits: 7,
            wide_threshold: 14,
            grouping: false,
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

/// How the light/dark preference of the terminal is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeSetting {
    Auto,
    Light,
    Dark,
    None,
}

impl SchemeSetting {
    pub fn resolve(self) -> ColorScheme {
        match self {
            SchemeSetting::Auto => ColorScheme::detect(),
            SchemeSetting::Light => ColorScheme::Light,
            SchemeSetting::Dark => ColorScheme::Dark,
            SchemeSetting::None => ColorScheme::NoPreference,
        }
    }
}

/// Theme selection when nothing is stored yet
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Used when no preference is stored and the scheme is unknown
    pub default: ThemeId,
    pub color_scheme: SchemeSetting,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: ThemeId::Theme1,
            color_scheme: SchemeSetting::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    /// Log file; defaults to `<cache_dir>/calcpad/calcpad.log`
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_file(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("calcpad")
                .join("calcpad.log"),
        }
    }
}

/// Master configuration combining all calcpad settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// `<config_dir>/calcpad/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; an
    /// explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
