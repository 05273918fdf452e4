//! File system site repository
//!
//! A site is a directory holding `.cmstag/config.toml` plus block and
//! snippet files:
//!
//! ```text
//! <site>/blocks/<identifier>.html
//! <site>/snippets/<identifier>.html
//! ```

use crate::domain::{OwnerContext, Tag, TagUse};
use crate::error::{CmsTagError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SITE_DIR: &str = ".cmstag";
const STAGING_DIR: &str = ".cmstag.init";
const CONFIG_FILE: &str = "config.toml";
const BLOCKS_DIR: &str = "blocks";
const SNIPPETS_DIR: &str = "snippets";
const CONTENT_EXTENSION: &str = "html";

/// Kind of stored content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Block,
    Snippet,
}

impl ContentKind {
    fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Block => BLOCKS_DIR,
            ContentKind::Snippet => SNIPPETS_DIR,
        }
    }
}

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Load configuration from .cmstag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .cmstag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .cmstag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .cmstag with its config, then blocks and snippets directories
    fn initialize(&self, config: &Config) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemSite {
    pub root: PathBuf,
}

impl FileSystemSite {
    /// Create a new site with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemSite { root }
    }

    /// Discover site root by walking up from current directory
    /// First checks CMSTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CMSTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_site_dir(&path) {
                return Ok(FileSystemSite::new(path));
            } else {
                return Err(CmsTagError::Config(format!(
                    "CMSTAG_ROOT is set to '{}' but no .cmstag directory found. \
                    Run 'cmstag init' in that directory or unset CMSTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_site_dir(&current) {
                return Ok(FileSystemSite::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CmsTagError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_site_dir(path: &Path) -> bool {
        path.join(SITE_DIR).is_dir()
    }

    fn content_path(&self, kind: ContentKind, identifier: &str) -> PathBuf {
        self.root
            .join(kind.dir_name())
            .join(format!("{}.{}", identifier, CONTENT_EXTENSION))
    }

    /// Read stored content. Ok(None) when the file does not exist.
    pub fn read_content(&self, kind: ContentKind, identifier: &str) -> Result<Option<String>> {
        let path = self.content_path(kind, identifier);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CmsTagError::Io(e)),
        }
    }

    /// Write stored content, creating the content directory if needed
    pub fn write_content(&self, kind: ContentKind, identifier: &str, content: &str) -> Result<()> {
        let path = self.content_path(kind, identifier);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content).map_err(CmsTagError::Io)
    }

    /// Identifiers of all stored content of a kind, sorted
    pub fn list_content(&self, kind: ContentKind) -> Result<Vec<String>> {
        let dir = self.root.join(kind.dir_name());
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut identifiers = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| CmsTagError::Io(e.into()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(CONTENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                identifiers.push(stem.to_string());
            }
        }
        identifiers.sort();
        Ok(identifiers)
    }
}

impl SiteRepository for FileSystemSite {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_site_dir(&self.root)
    }

    fn initialize(&self, config: &Config) -> Result<()> {
        let site_dir = self.root.join(SITE_DIR);

        if site_dir.join(CONFIG_FILE).exists() {
            return Err(CmsTagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        if site_dir.is_dir() {
            // left behind by an init that never wrote its config
            tracing::warn!(root = %self.root.display(), "completing partial site directory");
            config.write_to(&site_dir.join(CONFIG_FILE))?;
        } else {
            // .cmstag only appears once its config is in place
            let staging = self.root.join(STAGING_DIR);
            if staging.exists() {
                fs::remove_dir_all(&staging)?;
            }
            fs::create_dir(&staging)?;
            config.write_to(&staging.join(CONFIG_FILE))?;
            fs::rename(&staging, &site_dir)?;
        }

        fs::create_dir_all(self.root.join(BLOCKS_DIR))?;
        fs::create_dir_all(self.root.join(SNIPPETS_DIR))?;
        Ok(())
    }
}

/// Owner context reading blocks and snippets from a site on demand
#[derive(Debug)]
pub struct SiteContext<'a> {
    site: &'a FileSystemSite,
    tags: Vec<TagUse>,
}

impl<'a> SiteContext<'a> {
    pub fn new(site: &'a FileSystemSite) -> Self {
        SiteContext {
            site,
            tags: Vec::new(),
        }
    }

    /// Tags registered during expansion, in order
    pub fn into_tags(self) -> Vec<TagUse> {
        self.tags
    }

    fn read(&self, kind: ContentKind, identifier: &str) -> Option<String> {
        match self.site.read_content(kind, identifier) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(identifier, error = %e, "failed to read stored content");
                None
            }
        }
    }
}

impl OwnerContext for SiteContext<'_> {
    fn block_content(&self, identifier: &str) -> Option<String> {
        self.read(ContentKind::Block, identifier)
    }

    fn snippet_content(&self, identifier: &str) -> Option<String> {
        self.read(ContentKind::Snippet, identifier)
    }

    fn register_tag(&mut self, tag: &Tag<'_>) {
        let used = TagUse::from_tag(tag, &*self);
        self.tags.push(used);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_site(temp: &TempDir) -> FileSystemSite {
        let site = FileSystemSite::new(temp.path().to_path_buf());
        site.initialize(&Config::new()).unwrap();
        site
    }

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);

        assert!(site.is_initialized());
        assert!(temp.path().join("blocks").is_dir());
        assert!(temp.path().join("snippets").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);
        assert!(site.initialize(&Config::new()).is_err());
    }

    #[test]
    fn test_initialize_writes_config_with_site_dir() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);

        assert!(temp.path().join(".cmstag/config.toml").is_file());
        assert!(!temp.path().join(".cmstag.init").exists());
        assert!(site.load_config().is_ok());
    }

    #[test]
    fn test_initialize_completes_partial_site_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".cmstag")).unwrap();

        let site = FileSystemSite::new(temp.path().to_path_buf());
        let mut config = Config::new();
        config.max_depth = 7;
        site.initialize(&config).unwrap();

        assert_eq!(site.load_config().unwrap().max_depth, 7);
        assert!(temp.path().join("blocks").is_dir());
    }

    #[test]
    fn test_initialize_replaces_stale_staging_dir() {
        let temp = TempDir::new().unwrap();
        let staging = temp.path().join(".cmstag.init");
        fs::create_dir(&staging).unwrap();
        fs::write(staging.join("config.toml"), "not = [valid").unwrap();

        let site = init_site(&temp);

        assert!(!staging.exists());
        assert!(site.load_config().is_ok());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        init_site(&temp);
        let nested = temp.path().join("pages").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let site = FileSystemSite::discover_from(&nested).unwrap();
        assert_eq!(site.root, temp.path());
    }

    #[test]
    fn test_discover_from_outside_site() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemSite::discover_from(temp.path());
        assert!(matches!(result, Err(CmsTagError::NotSiteDirectory(_))));
    }

    #[test]
    fn test_read_and_write_content() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);

        assert_eq!(site.read_content(ContentKind::Block, "header").unwrap(), None);

        site.write_content(ContentKind::Block, "header", "Hello")
            .unwrap();
        assert_eq!(
            site.read_content(ContentKind::Block, "header").unwrap(),
            Some("Hello".to_string())
        );
        assert_eq!(site.read_content(ContentKind::Snippet, "header").unwrap(), None);
    }

    #[test]
    fn test_list_content_sorted_html_only() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);
        site.write_content(ContentKind::Block, "sidebar.about", "a")
            .unwrap();
        site.write_content(ContentKind::Block, "content", "b")
            .unwrap();
        fs::write(temp.path().join("blocks/notes.txt"), "ignored").unwrap();

        assert_eq!(
            site.list_content(ContentKind::Block).unwrap(),
            vec!["content", "sidebar.about"]
        );
        assert!(site.list_content(ContentKind::Snippet).unwrap().is_empty());
    }

    #[test]
    fn test_site_context_reads_files() {
        let temp = TempDir::new().unwrap();
        let site = init_site(&temp);
        site.write_content(ContentKind::Snippet, "footer", "Bye")
            .unwrap();

        let context = SiteContext::new(&site);
        assert_eq!(context.snippet_content("footer"), Some("Bye".to_string()));
        assert_eq!(context.block_content("footer"), None);
        assert!(context.into_tags().is_empty());
    }
}
