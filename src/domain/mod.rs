//! Domain layer - Tag parsing, resolution and expansion

pub mod expander;
pub mod options;
pub mod owner;
pub mod sanitize;
pub mod tags;

pub use expander::{Ancestry, ContentExpander, DEFAULT_MAX_DEPTH};
pub use options::OptionsMap;
pub use owner::{BlockSet, BlockStatus, OwnerContext, TagUse};
pub use sanitize::RenderSettings;
pub use tags::{Tag, TagSignature, TagTypeRegistry, TagVariant};
