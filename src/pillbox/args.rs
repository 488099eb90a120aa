use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pillbox")]
#[command(about = "Medicine inventory tracker with drawer capacity management", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a medicine to a drawer
    #[command(alias = "a")]
    Add {
        /// Medicine name
        name: String,

        /// Weight of a single unit
        #[arg(short, long)]
        weight: f64,

        /// Number of units
        #[arg(short, long)]
        quantity: u32,

        /// Cost per unit
        #[arg(short, long)]
        cost: f64,

        /// Target drawer id
        #[arg(short, long)]
        drawer: String,
    },

    /// Remove units of a medicine
    #[command(alias = "rm")]
    Remove {
        /// Medicine name (exact match)
        name: String,

        /// Number of units to remove
        quantity: u32,
    },

    /// Search medicines by name
    Search {
        /// Case-insensitive substring of the name
        term: String,
    },

    /// List the inventory and drawer loads
    #[command(alias = "ls")]
    List,

    /// Export the inventory as CSV
    Export {
        /// Output file (defaults to the configured export file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import an exported inventory file, replacing the current state
    Import {
        /// Path to a previously exported file
        path: PathBuf,
    },

    /// Initialize the store with the default drawers
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
