//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_blocks;
pub mod manage_config;
pub mod render;

pub use init::InitService;
pub use list_blocks::{ContentListing, ListBlocksService};
pub use manage_config::ConfigService;
pub use render::{RenderOptions, RenderOutput, RenderService};
