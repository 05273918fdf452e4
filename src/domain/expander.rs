//! Recursive tag expansion
//!
//! Content is split into tag signatures and literal text. Each signature is
//! resolved, registered with the owner and replaced by its rendered content,
//! which is expanded again with the tag on the ancestry stack.
//!
//! - unrecognized signatures are kept as literal text
//! - a tag already on its own ancestry stack expands to nothing
//! - nesting deeper than `max_depth` fails with `MaxDepthExceeded`

use crate::domain::owner::OwnerContext;
use crate::domain::sanitize::RenderSettings;
use crate::domain::tags::TagTypeRegistry;
use crate::error::{CmsTagError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Default limit on tag nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Splits content into signature candidates (group 1) and text (group 2).
/// Every byte of input lands in exactly one match.
fn tokenizer_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\{\{\s*cms:[^{}]*\}\})|((?:\{?[^{])+|\{+)").unwrap())
}

/// Ids of the tags enclosing the content currently being expanded, outermost first.
///
/// Pushed before a tag's content is expanded and popped afterwards, so it
/// always mirrors the current expansion path.
#[derive(Debug, Clone)]
pub struct Ancestry {
    ids: Vec<String>,
    max_depth: usize,
}

impl Ancestry {
    pub fn new(max_depth: usize) -> Self {
        Ancestry {
            ids: Vec::new(),
            max_depth,
        }
    }

    /// Enter a tag. Fails without pushing when the depth limit is reached.
    pub fn push(&mut self, id: String) -> Result<()> {
        if self.ids.len() >= self.max_depth {
            return Err(CmsTagError::MaxDepthExceeded {
                max_depth: self.max_depth,
                tag: id,
            });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.ids.is_empty(), "Ancestry::pop() on empty stack");
        self.ids.pop();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|a| a == id)
    }

    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// One piece of scanned content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Signature(&'a str),
    Text(&'a str),
}

fn tokenize(content: &str) -> impl Iterator<Item = Token<'_>> {
    tokenizer_regex().captures_iter(content).filter_map(|caps| {
        if let Some(signature) = caps.get(1) {
            Some(Token::Signature(signature.as_str()))
        } else {
            caps.get(2).map(|text| Token::Text(text.as_str()))
        }
    })
}

/// Expands tags in content against a registry
#[derive(Debug, Clone, Copy)]
pub struct ContentExpander<'r> {
    registry: &'r TagTypeRegistry,
    settings: RenderSettings,
    max_depth: usize,
}

impl<'r> ContentExpander<'r> {
    pub fn new(registry: &'r TagTypeRegistry) -> Self {
        ContentExpander {
            registry,
            settings: RenderSettings::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand all tags in `content`, registering each expanded tag with the owner
    pub fn expand(&self, owner: &mut dyn OwnerContext, content: &str) -> Result<String> {
        let mut ancestry = Ancestry::new(self.max_depth);
        self.expand_within(owner, content, &mut ancestry)
    }

    /// Expand `content` as the rendered body of the tags on `ancestry`
    pub fn expand_within(
        &self,
        owner: &mut dyn OwnerContext,
        content: &str,
        ancestry: &mut Ancestry,
    ) -> Result<String> {
        let mut output = String::with_capacity(content.len());

        for token in tokenize(content) {
            match token {
                Token::Text(text) => output.push_str(text),
                Token::Signature(signature) => {
                    let Some(tag) = self.registry.resolve(signature) else {
                        output.push_str(signature);
                        continue;
                    };

                    let id = tag.id();
                    if ancestry.contains(&id) {
                        tracing::debug!(%id, ancestors = ?ancestry.ids(), "skipping self-referencing tag");
                        continue;
                    }

                    ancestry.push(id)?;
                    owner.register_tag(&tag);
                    let rendered = tag.render(&*owner, &self.settings);
                    tracing::trace!(id = %tag.id(), depth = ancestry.depth(), "expanding tag");
                    let expanded = self.expand_within(owner, &rendered, ancestry);
                    ancestry.pop();
                    output.push_str(&expanded?);
                }
            }
        }

        Ok(output)
    }
}
