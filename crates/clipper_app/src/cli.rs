use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "clipper",
    version,
    about = "Fetch, filter, and save nature.com articles by type"
)]
pub struct Cli {
    /// Log debug detail.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// With no subcommand, runs an interactive harvest: the page count
    /// and article type are read from standard input.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk listing pages and save every article of one type.
    Harvest {
        /// Number of listing pages to visit; prompted for when omitted.
        #[arg(long)]
        pages: Option<u32>,

        /// Article type label to keep (exact match); prompted for when omitted.
        #[arg(long = "type")]
        article_type: Option<String>,

        /// First listing page number.
        #[arg(long, default_value_t = 1)]
        start_page: u32,

        /// Write files directly into the output directory instead of
        /// Page_<n> subdirectories.
        #[arg(long)]
        flat: bool,

        /// Directory the Page_<n> folders are created in.
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Print the `content` field of a JSON quote endpoint.
    Quote {
        /// Quote URL; prompted for when omitted.
        url: Option<String>,
    },

    /// Print the title and description of an IMDb movie page.
    Movie {
        /// Movie or series URL; prompted for when omitted.
        url: Option<String>,
    },

    /// Save a page's raw source bytes to a file.
    Snapshot {
        /// Page URL; prompted for when omitted.
        url: Option<String>,

        /// Destination file.
        #[arg(long, default_value = clipper_engine::DEFAULT_DESTINATION)]
        output: PathBuf,
    },
}
