//! Command-line arguments for the trendpress binary.

use clap::Parser;
use std::path::PathBuf;

/// AI trend article generator for the Hugo site.
#[derive(Debug, Parser)]
#[command(name = "trendpress", version, about)]
pub struct Cli {
    /// Number of articles to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// How many posts to keep during cleanup.
    #[arg(long, default_value_t = 5)]
    pub keep: usize,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Directory generated Markdown posts are written to.
    #[arg(long, default_value = "content/posts")]
    pub content_dir: PathBuf,

    /// Directory static assets (placeholder images) are written to.
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,
}
