use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pickr")]
#[command(about = "Browse recent and searched photos from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file (RON). Defaults to ./pickr.ron when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recent photos
    Recent {
        /// Number of pages to scroll through
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Search photos by text
    Search {
        query: String,

        /// Number of pages to scroll through
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Show exif and info for a photo from the first feed page
    Detail {
        photo_id: String,

        /// Load the feed from this search instead of recent photos
        #[arg(short, long)]
        query: Option<String>,
    },
}
