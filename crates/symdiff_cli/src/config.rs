use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Settings read from `symdiff.toml`. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub typeset: bool,
    pub variable: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            typeset: false,
            variable: "x".to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// A missing file is not an error; a broken one is logged and ignored.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::from_toml(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!(
                        path = %path.display(),
                        "Error parsing config file: {}. Using defaults.", e
                    ),
                },
                Err(e) => warn!(
                    path = %path.display(),
                    "Error reading config file: {}. Using defaults.", e
                ),
            }
        }
        Self::default()
    }
}
