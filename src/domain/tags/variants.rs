//! Built-in tag variants
//!
//! - `page`    - renders the owner's block with the tag identifier
//! - `field`   - block-backed data that is registered but renders nothing
//! - `snippet` - renders a reusable snippet
//! - `partial` - emits a partial render call for the host template engine
//! - `helper`  - emits a helper call for the host template engine

use crate::domain::options::OptionsMap;
use crate::domain::owner::OwnerContext;
use crate::domain::sanitize::RenderSettings;
use crate::domain::tags::{Tag, TagVariant};

#[derive(Debug, Default, Clone, Copy)]
pub struct PageTag;

impl TagVariant for PageTag {
    fn name(&self) -> &'static str {
        "page"
    }

    fn is_block(&self) -> bool {
        true
    }

    fn content(&self, tag: &Tag<'_>, owner: &dyn OwnerContext) -> Option<String> {
        owner.block_content(tag.identifier()?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FieldTag;

impl TagVariant for FieldTag {
    fn name(&self) -> &'static str {
        "field"
    }

    fn is_block(&self) -> bool {
        true
    }

    fn content(&self, tag: &Tag<'_>, owner: &dyn OwnerContext) -> Option<String> {
        owner.block_content(tag.identifier()?)
    }

    fn render(&self, _tag: &Tag<'_>, _owner: &dyn OwnerContext, _settings: &RenderSettings) -> String {
        String::new()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SnippetTag;

impl TagVariant for SnippetTag {
    fn name(&self) -> &'static str {
        "snippet"
    }

    fn content(&self, tag: &Tag<'_>, owner: &dyn OwnerContext) -> Option<String> {
        owner.snippet_content(tag.identifier()?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PartialTag;

impl TagVariant for PartialTag {
    fn name(&self) -> &'static str {
        "partial"
    }

    fn sanitize_exempt(&self) -> bool {
        true
    }

    fn render(&self, tag: &Tag<'_>, _owner: &dyn OwnerContext, _settings: &RenderSettings) -> String {
        let path = quote(tag.identifier().unwrap_or_default());
        let locals = keyword_args(tag.options());
        if locals.is_empty() {
            format!("<%= render partial: {} %>", path)
        } else {
            format!("<%= render partial: {}, locals: {{{}}} %>", path, locals)
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HelperTag;

impl TagVariant for HelperTag {
    fn name(&self) -> &'static str {
        "helper"
    }

    fn sanitize_exempt(&self) -> bool {
        true
    }

    fn render(&self, tag: &Tag<'_>, _owner: &dyn OwnerContext, _settings: &RenderSettings) -> String {
        let name = tag.identifier().unwrap_or_default();
        if !is_plain_name(name) {
            tracing::warn!(name, "helper name is not a plain method name, skipping");
            return String::new();
        }
        format!("<%= {}({}) %>", name, keyword_args(tag.options()))
    }
}

/// `k1: "v1", k2: "v2"`. Keys that are not plain names are dropped.
fn keyword_args(options: &OptionsMap) -> String {
    options
        .iter()
        .filter(|(k, _)| {
            let plain = is_plain_name(k);
            if !plain {
                tracing::warn!(key = k, "option key is not a plain name, dropping");
            }
            plain
        })
        .map(|(k, v)| format!("{}: {}", k, quote(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// ASCII letter or underscore, then ASCII letters, digits and underscores
fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Double-quote a value so it stays inert inside a `<%= %>` tag: backslashes,
/// quotes and interpolation are escaped and `%>` can't close the tag
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#")
        .replace("%>", "%\\>");
    format!("\"{}\"", escaped)
}
