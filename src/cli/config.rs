// ABOUTME: Configuration management for the scrivener application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_output_dir: Option<PathBuf>,

    /// Matter fields filled in when a record leaves them blank, so a
    /// recurring identity does not have to be retyped per matter file
    #[serde(default)]
    pub field_defaults: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output_dir: None,
            field_defaults: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;
            config.merge_env();
            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env();
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let mut candidates = vec![
            PathBuf::from("scrivener.yaml"),
            PathBuf::from("scrivener.yml"),
            PathBuf::from(".scrivener.yaml"),
            PathBuf::from(".scrivener.yml"),
        ];

        if let Ok(home) = std::env::var("HOME") {
            candidates.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("scrivener")
                    .join("config.yaml"),
            );
        }

        candidates
            .iter()
            .find(|p| p.exists())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("scrivener.yaml"))
    }

    /// Merge settings from environment variables
    fn merge_env(&mut self) {
        if let Ok(dir) = std::env::var("SCRIVENER_OUTPUT_DIR") {
            self.default_output_dir = Some(PathBuf::from(dir));
        }

        if let Ok(level) = std::env::var("SCRIVENER_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Merge field defaults supplied at a higher priority
    pub fn merge_field_defaults(&mut self, defaults: HashMap<String, String>) {
        self.field_defaults.extend(defaults);
    }
}
