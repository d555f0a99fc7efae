//! Toggle configuration persistence
//!
//! Stores user preferences in `~/.config/string-toggle/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default delay before decorations are recomputed after an edit
pub const DEFAULT_REFRESH_DEBOUNCE_MS: u64 = 150;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Collapse split strings before a document is saved.
    /// Also turns decorations of split strings on or off.
    #[serde(default = "default_auto_collapse")]
    pub auto_collapse_on_save: bool,

    /// Quiet period after the last edit before decorations refresh
    #[serde(default = "default_refresh_debounce_ms")]
    pub refresh_debounce_ms: u64,
}

fn default_auto_collapse() -> bool {
    true
}

fn default_refresh_debounce_ms() -> u64 {
    DEFAULT_REFRESH_DEBOUNCE_MS
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            auto_collapse_on_save: default_auto_collapse(),
            refresh_debounce_ms: default_refresh_debounce_ms(),
        }
    }
}

impl ToggleConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
