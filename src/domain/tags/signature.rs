//! Tag signature matching

use regex::Regex;
use std::sync::OnceLock;

/// Regex for a whole tag signature: `{{ cms:type:identifier options }}`
///
/// Types and identifiers are ASCII word characters; identifiers may also have
/// interior dots and dashes, so `sidebar.about` and `main-menu` are single
/// identifiers. Options must start after whitespace or punctuation, so a
/// non-ASCII letter can't silently cut an identifier short.
fn signature_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"(?s)\A\s*\{\{\s*cms:([A-Za-z0-9_]+)",
            r"(?::([A-Za-z0-9_](?:[A-Za-z0-9_.\-]*[A-Za-z0-9_])?))?",
            r"(\s.*?|[^\w\s].*?)?\s*\}\}\s*\z",
        ))
        .unwrap()
    })
}

/// The parts of a matched tag signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSignature {
    pub tag_type: String,
    pub identifier: Option<String>,
    pub options_text: String,
}

impl TagSignature {
    /// Match text against the signature shape. Returns None for anything that
    /// is not a tag signature.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = signature_regex().captures(text)?;

        Some(TagSignature {
            tag_type: caps[1].to_string(),
            identifier: caps.get(2).map(|m| m.as_str().to_string()),
            options_text: caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        })
    }
}
