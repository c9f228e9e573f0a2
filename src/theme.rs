//! Theme preference
//!
//! Three fixed themes. On startup a stored preference wins, then the
//! terminal's light/dark hint, then the configured default. The preference
//! is only written when the user picks a theme.

use crate::storage::{PreferenceStore, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key under which the theme id is stored
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeId {
    #[serde(rename = "theme-1")]
    Theme1,
    #[serde(rename = "theme-2")]
    Theme2,
    #[serde(rename = "theme-3")]
    Theme3,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Theme1, ThemeId::Theme2, ThemeId::Theme3];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Theme1 => "theme-1",
            ThemeId::Theme2 => "theme-2",
            ThemeId::Theme3 => "theme-3",
        }
    }

    /// Position on the 1-2-3 switcher
    pub fn number(self) -> u8 {
        match self {
            ThemeId::Theme1 => 1,
            ThemeId::Theme2 => 2,
            ThemeId::Theme3 => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeId::Theme1 => ThemeId::Theme2,
            ThemeId::Theme2 => ThemeId::Theme3,
            ThemeId::Theme3 => ThemeId::Theme1,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s.trim())
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Light/dark hint from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
    NoPreference,
}

impl ColorScheme {
    /// Read the `COLORFGBG` hint exported by many terminal emulators.
    pub fn detect() -> Self {
        match std::env::var("COLORFGBG") {
            Ok(value) => Self::from_colorfgbg(&value),
            Err(_) => ColorScheme::NoPreference,
        }
    }

    /// Parse a `fg;bg` (or `fg;default;bg`) value. The last field is the
    /// background palette index; 0-6 and 8 are dark colours.
    pub fn from_colorfgbg(value: &str) -> Self {
        let background = value.rsplit(';').next().map(str::trim);
        match background.and_then(|bg| bg.parse::<u8>().ok()) {
            Some(0..=6) | Some(8) => ColorScheme::Dark,
            Some(_) => ColorScheme::Light,
            None => ColorScheme::NoPreference,
        }
    }

    /// Theme matching this scheme, if it expresses a preference
    pub fn preferred_theme(self) -> Option<ThemeId> {
        match self {
            ColorScheme::Light => Some(ThemeId::Theme2),
            ColorScheme::Dark => Some(ThemeId::Theme3),
            ColorScheme::NoPreference => None,
        }
    }
}

/// Pick the theme to start with.
///
/// A store that fails to read is treated like an empty one.
pub fn resolve_startup_theme(
    store: &dyn PreferenceStore,
    scheme: ColorScheme,
    fallback: ThemeId,
) -> ThemeId {
    match store.get(THEME_KEY) {
        Ok(Some(stored)) => match stored.parse::<ThemeId>() {
            Ok(theme) => {
                tracing::debug!(%theme, "using stored theme preference");
                return theme;
            }
            Err(err) => tracing::warn!(%err, "ignoring stored theme preference"),
        },
        Ok(None) => {}
        Err(err) => tracing::warn!(%err, "cannot read theme preference"),
    }

    scheme.preferred_theme().unwrap_or(fallback)
}

/// Persist an explicit theme choice
pub fn select_theme(store: &mut dyn PreferenceStore, theme: ThemeId) -> Result<(), StorageError> {
    tracing::info!(%theme, "theme selected");
    store.set(THEME_KEY, theme.as_str())
}
