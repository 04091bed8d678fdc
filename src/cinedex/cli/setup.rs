use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cinedex", bin_name = "cinedex", version)]
#[command(about = "Personal movie catalog with a static website", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (.json or .csv); overrides the configured data file
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Directory holding config.toml
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies
    #[command(alias = "ls")]
    List,

    /// Look a movie up online and add it
    #[command(alias = "a")]
    Add {
        /// Title to look up
        title: String,
    },

    /// Delete a movie by (part of) its title
    #[command(alias = "rm")]
    Delete {
        /// Case-sensitive part of the title
        title: String,

        /// Treat the title as complete instead of a fragment
        #[arg(long)]
        exact: bool,
    },

    /// Set the note of a movie
    #[command(alias = "u")]
    Update {
        /// Case-sensitive part of the title
        title: String,

        /// New note text
        note: String,

        /// Treat the title as complete instead of a fragment
        #[arg(long)]
        exact: bool,
    },

    /// Rating statistics
    Stats,

    /// Pick a random movie
    Random,

    /// Search titles, ignoring case
    Search { keyword: String },

    /// Movies sorted by rating, best first
    Sorted,

    /// Generate the static website
    Website,
}
