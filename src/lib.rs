//! cmstag - Recursive CMS tag expansion
//!
//! Scans content for `{{ cms:type:identifier options }}` signatures, resolves
//! them against a registry of tag variants and expands whatever each tag
//! renders, guarding against self-referencing tags and runaway nesting.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CmsTagError;
