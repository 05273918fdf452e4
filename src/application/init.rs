//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemSite, SiteRepository};
use std::fs;
use std::path::Path;

/// Service for initializing sites
pub struct InitService;

impl InitService {
    /// Initialize a new site at the specified path
    pub fn execute(path: &Path, max_depth: Option<usize>) -> Result<()> {
        let mut config = Config::new();
        if let Some(depth) = max_depth {
            config.max_depth = depth;
        }
        config.validate()?;

        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let site = FileSystemSite::new(path.to_path_buf());
        site.initialize(&config)?;

        tracing::debug!(root = %path.display(), "site initialized");
        println!("Initialized cmstag site at {}", path.display());

        Ok(())
    }
}
