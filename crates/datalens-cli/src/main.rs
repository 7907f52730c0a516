//! datalens CLI - browse datasets from the terminal or a web page.

mod cli;
mod commands;
mod server;
mod viewer;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View {
            dataset,
            config,
            root,
        } => commands::view::run(dataset, config, root, cli.verbose),

        Commands::Serve {
            root,
            port,
            no_open,
        } => commands::serve::run(root, port, no_open, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
