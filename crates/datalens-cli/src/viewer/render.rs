//! Terminal rendering for the viewer.

use colored::Colorize;
use datalens::{DatasetReference, DatasetSummary, NormalizedRecord, PRESERVED_TEXT_FIELDS};

/// Display a single example with one block per field.
pub fn display_example(example: &NormalizedRecord, index: usize, total: usize) {
    println!();
    println!(
        "{}",
        format!("Example {} of {}", index + 1, total).magenta().bold()
    );
    println!();

    for (name, value) in example {
        println!("{}", format!("{}:", name).cyan().bold());

        match value {
            // Payload text prints exactly as stored.
            serde_json::Value::String(text) if PRESERVED_TEXT_FIELDS.contains(&name.as_str()) => {
                println!("{}", text.green());
            }
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                let pretty =
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                println!("{}", pretty.yellow());
            }
            serde_json::Value::String(text) => {
                println!("{}", text.green());
            }
            other => {
                println!("{}", other.to_string().green());
            }
        }

        println!();
    }
}

/// Display the navigation help.
pub fn display_help() {
    println!("{}", "Navigation:".bold());
    println!("  {} - Next example", "n".blue());
    println!("  {} - Previous example", "p".blue());
    println!("  {} - Jump to example number", "j NUMBER".blue());
    println!("  {} - Dataset info", "i".blue());
    println!("  {} - Show this help", "h".blue());
    println!("  {} - Quit", "q".blue());
}

/// Display the dataset summary screen.
pub fn display_info(reference: &DatasetReference, summary: &DatasetSummary) {
    println!();
    println!("{}", "Dataset info".magenta().bold());
    println!();
    println!("{} {}", "Dataset:".bold(), reference.dataset.green());
    println!(
        "{} {}",
        "Config:".bold(),
        reference.config.as_deref().unwrap_or("default").green()
    );
    println!(
        "{} {}",
        "Number of examples:".bold(),
        summary.num_examples.to_string().green()
    );
    println!();
    println!("{}", "Features:".bold());
    for feature in &summary.features {
        println!("  {}", feature.cyan());
    }
    println!();
}
