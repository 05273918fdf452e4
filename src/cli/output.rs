//! Output formatting utilities

use crate::application::ContentListing;
use crate::domain::{BlockStatus, TagUse};

/// Format expanded tags, one per line: `id  [block]  {options}`
///
/// Block-backed tags are marked, and flagged when their block is not stored.
pub fn format_tag_uses(tags: &[TagUse]) -> String {
    if tags.is_empty() {
        return "No tags expanded".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&tag.id);
        match tag.block {
            BlockStatus::Stored => output.push_str("  [block]"),
            BlockStatus::Missing => output.push_str("  [block missing]"),
            BlockStatus::NotBlock => {}
        }
        if !tag.options.is_empty() {
            output.push_str(&format!("  {{{}}}", tag.options));
        }
        output.push('\n');
    }
    output
}

/// Format block and snippet identifiers for display
pub fn format_content_listing(listing: &ContentListing) -> String {
    if listing.blocks.is_empty() && listing.snippets.is_empty() {
        return "No blocks found".to_string();
    }

    let mut output = String::new();
    for block in &listing.blocks {
        output.push_str(&format!("block    {}\n", block));
    }
    for snippet in &listing.snippets {
        output.push_str(&format!("snippet  {}\n", snippet));
    }
    output
}
