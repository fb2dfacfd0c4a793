//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::drive::DriveConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named drive configurations.
    pub drives: FnvIndexMap<String<32>, DriveConfig, 8>,
}

impl SystemConfig {
    /// Get a drive configuration by name.
    pub fn drive(&self, name: &str) -> Option<&DriveConfig> {
        self.drives
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all drive names.
    pub fn drive_names(&self) -> impl Iterator<Item = &str> {
        self.drives.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            drives: FnvIndexMap::new(),
        }
    }
}
