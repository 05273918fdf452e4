//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmstag")]
#[command(about = "Expand CMS tags in content files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Deepest allowed tag nesting
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Expand tags in a content file and print the result
    Render {
        /// Content file to expand
        file: PathBuf,

        /// Print the tags that were expanded after the content
        #[arg(short, long)]
        tags: bool,

        /// Leave script markers unescaped for this run
        #[arg(long)]
        allow_script: bool,

        /// Override the configured nesting limit
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List stored blocks and snippets
    Blocks,
}
