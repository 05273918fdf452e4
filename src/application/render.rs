//! Render use case
//!
//! Expands every tag in a content file against the blocks and snippets of a site.

use crate::domain::{ContentExpander, TagTypeRegistry, TagUse};
use crate::error::{CmsTagError, Result};
use crate::infrastructure::{FileSystemSite, SiteContext, SiteRepository};
use std::fs;
use std::path::PathBuf;

/// Options for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Content file to expand
    pub input: PathBuf,

    /// Override the configured script escaping
    pub allow_script: Option<bool>,

    /// Override the configured nesting limit
    pub max_depth: Option<usize>,
}

/// Result of a render pass
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub content: String,
    pub tags: Vec<TagUse>,
}

/// Service for rendering content files
pub struct RenderService {
    site: FileSystemSite,
    registry: TagTypeRegistry,
}

impl RenderService {
    /// Create new render service with the built-in tag variants
    pub fn new(site: FileSystemSite) -> Self {
        RenderService::with_registry(site, TagTypeRegistry::builtin())
    }

    pub fn with_registry(site: FileSystemSite, registry: TagTypeRegistry) -> Self {
        RenderService { site, registry }
    }

    /// Read the input file and expand it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file can't be read
    /// - The config is invalid
    /// - Tag nesting exceeds the depth limit
    pub fn execute(&self, options: &RenderOptions) -> Result<RenderOutput> {
        let input = if options.input.is_absolute() {
            options.input.clone()
        } else {
            std::env::current_dir()?.join(&options.input)
        };

        let content = fs::read_to_string(&input).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CmsTagError::Config(format!("Input file not found: {}", input.display()))
            } else {
                CmsTagError::Io(e)
            }
        })?;

        self.render_str(&content, options)
    }

    /// Expand a content string
    pub fn render_str(&self, content: &str, options: &RenderOptions) -> Result<RenderOutput> {
        let config = self.site.load_config()?;

        let mut settings = config.render_settings();
        if let Some(allow) = options.allow_script {
            settings.allow_script = allow;
        }
        let max_depth = options.max_depth.unwrap_or(config.max_depth);
        if max_depth == 0 {
            return Err(CmsTagError::Config(
                "Invalid max_depth: must be at least 1".to_string(),
            ));
        }

        let mut context = SiteContext::new(&self.site);
        let expanded = ContentExpander::new(&self.registry)
            .with_settings(settings)
            .with_max_depth(max_depth)
            .expand(&mut context, content)?;

        let tags = context.into_tags();
        tracing::debug!(tags = tags.len(), "render complete");

        Ok(RenderOutput {
            content: expanded,
            tags,
        })
    }
}
