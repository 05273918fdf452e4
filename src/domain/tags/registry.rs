//! Registry of known tag variants

use crate::domain::options::OptionsMap;
use crate::domain::tags::variants::{FieldTag, HelperTag, PageTag, PartialTag, SnippetTag};
use crate::domain::tags::{Tag, TagSignature, TagVariant};

/// Ordered set of tag variants. The first variant accepting a signature wins.
#[derive(Debug, Default)]
pub struct TagTypeRegistry {
    variants: Vec<Box<dyn TagVariant>>,
}

impl TagTypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in variants: page, field, snippet, partial, helper
    pub fn builtin() -> Self {
        TagTypeRegistry::new()
            .with(PageTag)
            .with(FieldTag)
            .with(SnippetTag)
            .with(PartialTag)
            .with(HelperTag)
    }

    /// Builder-style registration
    pub fn with(mut self, variant: impl TagVariant + 'static) -> Self {
        self.register(Box::new(variant));
        self
    }

    pub fn register(&mut self, variant: Box<dyn TagVariant>) {
        self.variants.push(variant);
    }

    /// Names of registered variants in matching order
    pub fn names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name()).collect()
    }

    /// First registered variant accepting the signature
    pub fn find_variant(&self, signature: &TagSignature) -> Option<&dyn TagVariant> {
        self.variants
            .iter()
            .map(|v| &**v)
            .find(|v| v.accepts(signature))
    }

    /// Resolve signature text into a tag. None when the text is not a
    /// signature or no registered variant accepts it.
    pub fn resolve(&self, text: &str) -> Option<Tag<'_>> {
        let Some(signature) = TagSignature::parse(text) else {
            tracing::debug!(text, "not a tag signature");
            return None;
        };

        let Some(variant) = self.find_variant(&signature) else {
            tracing::debug!(tag_type = %signature.tag_type, "no tag variant accepts signature");
            return None;
        };

        let options = OptionsMap::parse(&signature.options_text);
        Some(Tag::new(variant, signature.identifier, options))
    }
}
