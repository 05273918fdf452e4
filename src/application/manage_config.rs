//! Config management use case

use crate::error::{CmsTagError, Result};
use crate::infrastructure::{Config, FileSystemSite, SiteRepository};

/// Service for managing site configuration
pub struct ConfigService {
    site: FileSystemSite,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(site: FileSystemSite) -> Self {
        ConfigService { site }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.site.load_config()?;

        match key {
            "allow_script" => Ok(config.allow_script.to_string()),
            "max_depth" => Ok(config.max_depth.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CmsTagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: allow_script, max_depth, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.site.load_config()?;

        match key {
            "allow_script" => {
                config.allow_script = value.parse().map_err(|_| {
                    CmsTagError::Config(format!("Invalid allow_script value: '{}'", value))
                })?;
            }
            "max_depth" => {
                config.max_depth = value.parse().map_err(|_| {
                    CmsTagError::Config(format!("Invalid max_depth value: '{}'", value))
                })?;
                config.validate()?;
            }
            "created" => {
                return Err(CmsTagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CmsTagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: allow_script, max_depth",
                    key
                )));
            }
        }

        self.site.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.site.load_config()
    }
}
