//! Owner context - the entity whose content is being expanded
//!
//! An owner supplies the stored content behind block-backed tags and collects
//! every tag encountered during an expansion pass.

use crate::domain::options::OptionsMap;
use crate::domain::tags::Tag;
use std::collections::HashMap;

/// Whether a tag is backed by a stored block, and if that block exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    NotBlock,
    Stored,
    Missing,
}

/// Record of a tag that took part in an expansion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUse {
    pub id: String,
    pub tag_type: String,
    pub identifier: Option<String>,
    pub namespace: Option<String>,
    pub options: OptionsMap,
    pub block: BlockStatus,
}

impl TagUse {
    /// Snapshot a tag, checking block-backed tags against the owner's store
    pub fn from_tag(tag: &Tag<'_>, owner: &dyn OwnerContext) -> Self {
        let block = if !tag.is_block() {
            BlockStatus::NotBlock
        } else if tag.content(owner).is_some() {
            BlockStatus::Stored
        } else {
            BlockStatus::Missing
        };

        TagUse {
            id: tag.id(),
            tag_type: tag.tag_type().to_string(),
            identifier: tag.identifier().map(str::to_string),
            namespace: tag.namespace().map(str::to_string),
            options: tag.options().clone(),
            block,
        }
    }
}

/// Capabilities the expander needs from the content owner
pub trait OwnerContext {
    /// Stored content of the block with this identifier
    fn block_content(&self, identifier: &str) -> Option<String>;

    /// Stored content of a reusable snippet
    fn snippet_content(&self, _identifier: &str) -> Option<String> {
        None
    }

    /// Called once for every tag that gets expanded
    fn register_tag(&mut self, tag: &Tag<'_>);
}

/// In-memory owner backed by hash maps
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
    blocks: HashMap<String, String>,
    snippets: HashMap<String, String>,
    tags: Vec<TagUse>,
}

impl BlockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style block insertion
    pub fn with_block(mut self, identifier: &str, content: &str) -> Self {
        self.insert_block(identifier, content);
        self
    }

    pub fn with_snippet(mut self, identifier: &str, content: &str) -> Self {
        self.snippets
            .insert(identifier.to_string(), content.to_string());
        self
    }

    pub fn insert_block(&mut self, identifier: &str, content: &str) {
        self.blocks
            .insert(identifier.to_string(), content.to_string());
    }

    /// Tags registered so far, in expansion order
    pub fn tags(&self) -> &[TagUse] {
        &self.tags
    }
}

impl OwnerContext for BlockSet {
    fn block_content(&self, identifier: &str) -> Option<String> {
        self.blocks.get(identifier).cloned()
    }

    fn snippet_content(&self, identifier: &str) -> Option<String> {
        self.snippets.get(identifier).cloned()
    }

    fn register_tag(&mut self, tag: &Tag<'_>) {
        let used = TagUse::from_tag(tag, &*self);
        self.tags.push(used);
    }
}
