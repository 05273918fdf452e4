//! Error types for cmstag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cmstag
#[derive(Debug, Error)]
pub enum CmsTagError {
    #[error("Not a cmstag site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Maximum tag nesting depth of {max_depth} exceeded at tag '{tag}'")]
    MaxDepthExceeded { max_depth: usize, tag: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CmsTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CmsTagError::NotSiteDirectory(_) => 2,
            CmsTagError::MaxDepthExceeded { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CmsTagError::NotSiteDirectory(path) => {
                format!(
                    "Not a cmstag site: {}\n\n\
                    Suggestions:\n\
                    • Run 'cmstag init' in this directory to create a new site\n\
                    • Navigate to an existing site directory\n\
                    • Set CMSTAG_ROOT environment variable to your site path",
                    path.display()
                )
            }
            CmsTagError::MaxDepthExceeded { max_depth, tag } => {
                format!(
                    "Tag nesting went deeper than {} levels (at '{}')\n\n\
                    Suggestions:\n\
                    • Check for blocks that include each other through different tags\n\
                    • Raise the limit: cmstag config max_depth 64\n\
                    • Or for a single run: cmstag render <FILE> --max-depth 64",
                    max_depth, tag
                )
            }
            CmsTagError::Config(msg) => {
                if msg.contains("max_depth") {
                    format!(
                        "{}\n\n\
                        max_depth must be a positive integer\n\
                        Example: cmstag config max_depth 32",
                        msg
                    )
                } else if msg.contains("allow_script") {
                    format!(
                        "{}\n\n\
                        allow_script must be 'true' or 'false'\n\
                        Example: cmstag config allow_script true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CmsTagError
pub type Result<T> = std::result::Result<T, CmsTagError>;
