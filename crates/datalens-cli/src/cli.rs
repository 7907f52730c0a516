//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// datalens: browse datasets from the terminal or a web page
#[derive(Parser)]
#[command(name = "datalens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse a dataset interactively in the terminal
    View {
        /// Dataset identifier (e.g. "smoltalk" or "acme/corpus")
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Configuration name, for datasets that require one
        #[arg(value_name = "CONFIG")]
        config: Option<String>,

        /// Root directory of the dataset store
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Serve the dataset browsing API and web page
    Serve {
        /// Root directory of the dataset store
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Port for the web server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Don't automatically open the browser
        #[arg(long)]
        no_open: bool,
    },
}
