//! Tag system

pub mod registry;
pub mod signature;
pub mod tag;
pub mod variants;

// Re-export main types
pub use registry::TagTypeRegistry;
pub use signature::TagSignature;
pub use tag::{Tag, TagVariant};
pub use variants::{FieldTag, HelperTag, PageTag, PartialTag, SnippetTag};
