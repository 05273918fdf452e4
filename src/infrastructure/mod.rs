//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod site;

pub use config::Config;
pub use site::{ContentKind, FileSystemSite, SiteContext, SiteRepository};
