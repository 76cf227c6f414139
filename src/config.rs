//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/comet/config.yaml`

use serde::{Deserialize, Serialize};

/// Editor configuration loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Consecutive Ctrl-Q presses needed to quit with unsaved changes
    #[serde(default = "default_quit_confirmations")]
    pub quit_confirmations: u32,

    /// How long status messages stay visible, in seconds
    #[serde(default = "default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

fn default_quit_confirmations() -> u32 {
    3
}

fn default_message_timeout_secs() -> u64 {
    5
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_confirmations: default_quit_confirmations(),
            message_timeout_secs: default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.quit_confirmations, 3);
        assert_eq!(config.message_timeout_secs, 5);
    }

    #[test]
    fn test_partial_yaml_falls_back_per_field() {
        let config: EditorConfig = serde_yaml::from_str("quit_confirmations: 1\n").unwrap();
        assert_eq!(config.quit_confirmations, 1);
        assert_eq!(config.message_timeout_secs, 5);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: EditorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.quit_confirmations, 3);
    }
}
