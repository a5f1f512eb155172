use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_level")]
    pub default_level: u32,
    #[serde(default = "default_seed")]
    pub default_seed: u32,
    #[serde(default = "default_distractor_count")]
    pub distractor_count: usize,
    #[serde(default)]
    pub pangram_file: Option<String>,
}

fn default_level() -> u32 {
    0
}
fn default_seed() -> u32 {
    0
}
fn default_distractor_count() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            default_seed: default_seed(),
            distractor_count: default_distractor_count(),
            pangram_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordveil")
            .join("config.toml")
    }
}
