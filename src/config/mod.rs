use crate::core::SyringeResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Registry settings, usually kept next to an application's composition root.
///
/// ```yaml
/// label: app
/// validate_names: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Tag attached to every log event emitted by the registry
    #[serde(default = "default_label")]
    pub label: String,

    /// Reject empty capability names when providing
    #[serde(default = "default_true")]
    pub validate_names: bool,
}

fn default_label() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            validate_names: true,
        }
    }
}

impl RegistryConfig {
    /// Parse a config from YAML text. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> SyringeResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> SyringeResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save the config, creating parent directories as needed
    pub fn save(&self, path: &Path) -> SyringeResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_yaml::to_string(self)?;

        fs::write(path, content)?;
        Ok(())
    }
}
