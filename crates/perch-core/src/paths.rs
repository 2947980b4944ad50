//! Standard paths used by perch tools

use std::path::PathBuf;

/// Standard perch paths
pub struct Paths {
    /// Data directory (~/.local/share/perch)
    pub data: PathBuf,
    /// Config directory (~/.config/perch)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("perch");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("perch");

        Self { data, config }
    }

    /// Get the data directory for a tool
    pub fn state(&self, tool: &str) -> PathBuf {
        self.data.join(tool)
    }

    /// Get the shared config file path
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }
}
