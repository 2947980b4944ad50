//! Configuration shared by the perch tools

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global perch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether to send desktop notifications on timer completion
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: default_notifications(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults if absent
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("perch_config_test_missing.json");
        let _ = std::fs::remove_file(&path);
        let config = Config::load(&path).unwrap();
        assert!(config.notifications);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!(
            "perch_config_test_{}.json",
            std::process::id()
        ));
        let config = Config {
            notifications: false,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.notifications);

        let _ = std::fs::remove_file(&path);
    }
}
