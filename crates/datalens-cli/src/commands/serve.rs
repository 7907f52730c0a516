//! Serve command - run the dataset browsing API and web page.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use datalens::{DatasetFacade, LocalStore};

use crate::server::{app, state::AppState};

pub fn run(
    root: PathBuf,
    port: u16,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !root.is_dir() {
        return Err(format!("Dataset store root not found: {}", root.display()).into());
    }

    let facade = DatasetFacade::new(Arc::new(LocalStore::new(root.clone())));
    let state = AppState::new(facade);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dataset server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Store root: {}", root.display());
    if verbose {
        println!("  Preview: {} examples per load", state.preview_limit);
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
