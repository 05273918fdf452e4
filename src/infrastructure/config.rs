//! Configuration management

use crate::domain::{RenderSettings, DEFAULT_MAX_DEPTH};
use crate::error::{CmsTagError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Let `<%` / `%>` markers in block content through unescaped
    #[serde(default)]
    pub allow_script: bool,

    /// Deepest allowed tag nesting
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    pub created: DateTime<Utc>,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            allow_script: false,
            max_depth: DEFAULT_MAX_DEPTH,
            created: Utc::now(),
        }
    }

    /// Load config from .cmstag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".cmstag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CmsTagError::NotSiteDirectory(path.to_path_buf())
            } else {
                CmsTagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .cmstag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let site_dir = path.join(".cmstag");

        if !site_dir.exists() {
            fs::create_dir(&site_dir)?;
        }

        self.write_to(&site_dir.join("config.toml"))
    }

    /// Serialize to an explicit file path
    pub fn write_to(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(CmsTagError::Config(
                "Invalid max_depth: must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Render settings derived from this config
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            allow_script: self.allow_script,
        }
    }
}
