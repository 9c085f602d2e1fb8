use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "barista-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("unknown theme '{other}'"),
        }
    }
}

/// Barista view theme, stored as the bare string `light` or `dark`.
pub struct ThemePreference<S: KeyValueStore> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, THEME_STORAGE_KEY)
    }

    pub fn load_with_key(storage: S, key: &str) -> Self {
        let theme = match storage.get(key) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|_| {
                tracing::debug!(key, value = %stored, "unrecognised stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::error!(key, error = %e, "failed to load theme");
                Theme::default()
            }
        };
        Self {
            storage,
            key: key.to_string(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            tracing::error!(key = %self.key, error = %e, "failed to save theme");
        }
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }
}
