use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cepbook", bin_name = "cepbook", version)]
#[command(about = "Bookmark Brazilian addresses by postal code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding addresses.json and cepbook.toml
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List saved addresses, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Matches postal code, city or state (case and accent insensitive)
        query: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up a postal code and save the address
    #[command(alias = "a", display_order = 2)]
    Add {
        /// The 8 character postal code, e.g. 01001000
        cep: String,
    },

    /// Show every field of one or more addresses
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes, ranges or UUIDs (e.g. 1 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more addresses
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Indexes, ranges or UUIDs (e.g. 1 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete every address
    #[command(display_order = 5)]
    Clear {
        /// Skip the confirmation and clear immediately
        #[arg(short, long)]
        yes: bool,
    },
}
