//! List stored blocks and snippets

use crate::error::Result;
use crate::infrastructure::{ContentKind, FileSystemSite};

/// Identifiers of stored content grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentListing {
    pub blocks: Vec<String>,
    pub snippets: Vec<String>,
}

/// Service for listing site content
pub struct ListBlocksService {
    site: FileSystemSite,
}

impl ListBlocksService {
    pub fn new(site: FileSystemSite) -> Self {
        ListBlocksService { site }
    }

    pub fn execute(&self) -> Result<ContentListing> {
        Ok(ContentListing {
            blocks: self.site.list_content(ContentKind::Block)?,
            snippets: self.site.list_content(ContentKind::Snippet)?,
        })
    }
}
