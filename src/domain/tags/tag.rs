//! Tag instances and the behaviour shared by every tag variant

use crate::domain::options::OptionsMap;
use crate::domain::owner::OwnerContext;
use crate::domain::sanitize::{sanitize_script, RenderSettings};
use crate::domain::tags::TagSignature;
use std::fmt;

/// A kind of tag: how it is matched and what it renders.
///
/// Variants live in a [`TagTypeRegistry`](crate::domain::tags::TagTypeRegistry)
/// and are shared read-only across expansion passes.
pub trait TagVariant: fmt::Debug + Send + Sync {
    /// Tag type name as written in signatures (`page` in `{{ cms:page:x }}`)
    fn name(&self) -> &'static str;

    /// Whether signatures of this type must carry an identifier
    fn requires_identifier(&self) -> bool {
        true
    }

    /// Whether this variant handles the given signature
    fn accepts(&self, signature: &TagSignature) -> bool {
        signature.tag_type == self.name()
            && (signature.identifier.is_some() || !self.requires_identifier())
    }

    /// Block-backed tags read stored owner content under their identifier
    fn is_block(&self) -> bool {
        false
    }

    /// Variants whose output is script by nature skip marker escaping
    fn sanitize_exempt(&self) -> bool {
        false
    }

    /// Backing content of the tag, if it has any
    fn content(&self, _tag: &Tag<'_>, _owner: &dyn OwnerContext) -> Option<String> {
        None
    }

    /// Content to expand in place of the tag. Defaults to the backing content,
    /// escaped according to the settings.
    fn render(&self, tag: &Tag<'_>, owner: &dyn OwnerContext, settings: &RenderSettings) -> String {
        let content = self.content(tag, owner).unwrap_or_default();
        sanitize_script(&content, settings.allow_script, self.sanitize_exempt())
    }
}

/// A resolved tag, alive for a single expansion pass
#[derive(Debug, Clone)]
pub struct Tag<'r> {
    variant: &'r dyn TagVariant,
    identifier: Option<String>,
    namespace: Option<String>,
    options: OptionsMap,
}

impl<'r> Tag<'r> {
    pub fn new(variant: &'r dyn TagVariant, identifier: Option<String>, options: OptionsMap) -> Self {
        let namespace = identifier.as_deref().and_then(namespace_of);
        Tag {
            variant,
            identifier,
            namespace,
            options,
        }
    }

    /// Id used for cycle detection: variant name and identifier
    pub fn id(&self) -> String {
        format!(
            "{}_{}",
            self.variant.name(),
            self.identifier.as_deref().unwrap_or_default()
        )
    }

    pub fn tag_type(&self) -> &'static str {
        self.variant.name()
    }

    pub fn is_block(&self) -> bool {
        self.variant.is_block()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn options(&self) -> &OptionsMap {
        &self.options
    }

    pub fn content(&self, owner: &dyn OwnerContext) -> Option<String> {
        self.variant.content(self, owner)
    }

    pub fn render(&self, owner: &dyn OwnerContext, settings: &RenderSettings) -> String {
        self.variant.render(self, owner, settings)
    }
}

/// Everything before the last dot: `sidebar.about` => `sidebar`
fn namespace_of(identifier: &str) -> Option<String> {
    identifier
        .rsplit_once('.')
        .map(|(namespace, _)| namespace)
        .filter(|namespace| !namespace.trim().is_empty())
        .map(str::to_string)
}
