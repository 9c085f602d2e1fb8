use crate::layout::Plan;
use crate::preferences::CARDS_STORAGE_KEY;
use crate::theme::THEME_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_storage_dir() -> String {
    "storage".into()
}

fn default_cards_key() -> String {
    CARDS_STORAGE_KEY.into()
}

fn default_theme_key() -> String {
    THEME_STORAGE_KEY.into()
}

fn default_trial_used() -> u32 {
    Plan::default().trial_used
}

fn default_trial_limit() -> u32 {
    Plan::default().trial_limit
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Directory holding the preference files. Relative paths are resolved
    /// against the directory of the settings file.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_cards_key")]
    pub cards_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default = "default_trial_used")]
    pub trial_used: u32,
    #[serde(default = "default_trial_limit")]
    pub trial_limit: u32,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            cards_key: default_cards_key(),
            theme_key: default_theme_key(),
            premium: false,
            trial_used: default_trial_used(),
            trial_limit: default_trial_limit(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn storage_path(&self, settings_path: &Path) -> PathBuf {
        let dir = Path::new(&self.storage_dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        let base = settings_path.parent().unwrap_or_else(|| Path::new("."));
        base.join(dir)
    }

    pub fn plan(&self) -> Plan {
        Plan {
            premium: self.premium,
            trial_used: self.trial_used,
            trial_limit: self.trial_limit,
        }
    }
}
