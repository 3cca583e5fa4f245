use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::todo::Priority;
use crate::utils::paths::{get_config_path, get_database_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Priority preselected in the input row
    #[serde(default)]
    pub default_priority: Priority,

    /// Capture the mouse for clicking and dragging rows
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Overrides the database location inside the data directory
    #[serde(default)]
    pub database: Option<PathBuf>,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_priority: Priority::default(),
            mouse: default_mouse(),
            database: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }
}
