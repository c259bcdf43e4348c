use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[keywords]
# Job titles config with "software_engineer" and "general" keyword lists
# file = "/path/to/job_titles.json"
# Backend endpoint serving the same JSON payload
# url = "http://127.0.0.1:8080/api/job-title-keywords"
timeout_secs = 10
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TrackerConfig {
    pub keywords: Option<KeywordsConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KeywordsConfig {
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            file: None,
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

impl TrackerConfig {
    /// Loads the config at the default location, writing a commented default file first if needed.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()
    }

    pub fn keywords(&self) -> KeywordsConfig {
        self.keywords.clone().unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("jobtrack").join("config.toml")
    } else {
        PathBuf::from("jobtrack.toml")
    }
}
