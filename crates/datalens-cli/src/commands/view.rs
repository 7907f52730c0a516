//! View command - interactive terminal browsing of one dataset.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use datalens::{DatasetFacade, DatasetReference, LoadOutcome, LocalStore};

use crate::viewer;

pub fn run(
    dataset: String,
    config: Option<String>,
    root: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let facade = DatasetFacade::new(Arc::new(LocalStore::new(root.clone())));

    if verbose {
        println!("Using dataset store at {}", root.display());
    }

    println!();
    println!("{}", format!("Loading dataset {}...", dataset).yellow());

    // The dataset loads exactly once, before the navigation loop starts.
    let (handle, config) = match facade.load_split(&dataset, config.as_deref())? {
        LoadOutcome::Loaded(handle) => {
            println!("{}", "Dataset loaded successfully!".green());
            (handle, config)
        }
        LoadOutcome::ConfigRequired { configs } => {
            println!("{}", "This dataset requires a config name.".yellow());

            let Some(choice) = prompt_for_config(&dataset, &configs)? else {
                return Err("No config selected.".into());
            };

            match facade.load_split(&dataset, Some(choice.as_str()))? {
                LoadOutcome::Loaded(handle) => {
                    println!(
                        "{}",
                        format!("Dataset loaded successfully with config '{}'!", choice).green()
                    );
                    (handle, Some(choice))
                }
                LoadOutcome::ConfigRequired { .. } => {
                    return Err(
                        format!("Dataset '{}' still requires a configuration.", dataset).into(),
                    );
                }
            }
        }
    };

    let mut reference = DatasetReference::new(dataset);
    if let Some(config) = config {
        reference = reference.with_config(config);
    }
    let summary = handle.summary();

    // The session owns a fully normalized copy of the split.
    let mut records = Vec::with_capacity(handle.len());
    for i in 0..handle.len() {
        records.push(facade.record_at(handle.as_ref(), i as i64)?);
    }

    viewer::run_loop(&reference, &summary, &records)
}

/// Ask the user to pick a configuration, by number or by name.
///
/// Returns `None` when there is nothing to choose from or input ends.
fn prompt_for_config(
    dataset: &str,
    configs: &[String],
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if configs.is_empty() {
        return Ok(None);
    }

    println!();
    println!("{}", format!("Available configs for {}:", dataset).bold());
    for (i, config) in configs.iter().enumerate() {
        println!("  {}. {}", i + 1, config.cyan());
    }

    let stdin = io::stdin();
    loop {
        print!(
            "\n{} ",
            format!("Select a config (1-{}) or enter name directly:", configs.len()).bold()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();

        if let Ok(number) = choice.parse::<usize>() {
            if (1..=configs.len()).contains(&number) {
                return Ok(Some(configs[number - 1].clone()));
            }
        }

        if let Some(found) = configs.iter().find(|c| c.as_str() == choice) {
            return Ok(Some(found.clone()));
        }

        println!("{}", "Invalid selection. Please try again.".red());
    }
}
