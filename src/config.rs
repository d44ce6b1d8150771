use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Editor settings, read from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of a tab stop in columns
    pub tab_stop: usize,
    /// Extra quit presses required while there are unsaved changes
    pub quit_times: usize,
    /// How long a status message stays visible
    pub message_timeout_secs: u64,
    /// Banner shown in the middle of an empty document
    pub welcome_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_stop: 8,
            quit_times: 3,
            message_timeout_secs: 5,
            welcome_message: format!("Kite editor -- version {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Parse a config from JSON text
    pub fn from_json(content: &str) -> Result<Self, String> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        Ok(config.normalized())
    }

    /// Load a config from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_json(&content)
    }

    /// `<config dir>/kite/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kite").join("config.json"))
    }

    /// Load the user config if there is one; a broken file falls back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.tab_stop = self.tab_stop.max(1);
        self
    }
}
