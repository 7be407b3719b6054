use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for placemark-cli
#[derive(Debug, Parser)]
#[command(
    name = "placemark",
    version,
    about = "Extract point coordinates from KMZ archives and seed them into a point store"
)]
pub struct CliArgs {
    /// Snapshot file backing the point store
    #[arg(
        short = 's',
        long = "store",
        env = "PLACEMARK_STORE",
        default_value = "placemarks.bin",
        global = true
    )]
    pub store: PathBuf,

    /// Table to seed, list or edit
    #[arg(
        short = 't',
        long = "table",
        env = "PLACEMARK_TABLE",
        default_value = "blocked_signs",
        global = true
    )]
    pub table: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the points of a KMZ (or plain KML) file
    Extract {
        /// Path to the .kmz archive
        archive: PathBuf,

        /// Only take placemarks directly under the document
        #[arg(long)]
        top_level_only: bool,

        /// Deepest folder nesting accepted
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Print as JSON instead of one "lat, lon" line per point
        #[arg(long)]
        json: bool,
    },

    /// Show placemark, folder and skip counts for an archive
    Stats {
        /// Path to the .kmz archive
        archive: PathBuf,
    },

    /// Load an archive into the table unless it already has rows
    Seed {
        /// Path to the .kmz archive
        archive: PathBuf,
    },

    /// List all records of the table
    List,

    /// Show one record by id
    Show { id: u32 },

    /// Delete one record by id
    Delete { id: u32 },
}
