//! Interactive terminal viewer.
//!
//! The loop is deliberately line-oriented: read a command, apply it to the
//! session, redraw. All cursor logic lives in [`session`] where it can be
//! tested without a terminal.

mod render;
mod session;

pub use session::{Outcome, ViewerSession, parse_command};

use std::io::{self, BufRead, Write};

use colored::Colorize;
use datalens::{DatasetReference, DatasetSummary, NormalizedRecord};

/// Run the navigation loop until the user quits or input ends.
pub fn run_loop(
    reference: &DatasetReference,
    summary: &DatasetSummary,
    records: &[NormalizedRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    if records.is_empty() {
        println!("{}", "Dataset has no records to browse.".yellow());
        return Ok(());
    }

    let mut session = ViewerSession::new(records.len());
    let stdin = io::stdin();

    loop {
        render::display_example(&records[session.index()], session.index(), session.total());
        render::display_help();

        print!("\n{} ", "Enter command:".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.apply(parse_command(&line)) {
            Outcome::Continue => {}
            Outcome::ShowInfo => {
                render::display_info(reference, summary);
                wait_for_enter()?;
            }
            Outcome::Rejected(message) => {
                println!("{}", message.red());
                wait_for_enter()?;
            }
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn wait_for_enter() -> io::Result<()> {
    print!("Press Enter to continue...");
    io::stdout().flush()?;
    let mut scratch = String::new();
    io::stdin().lock().read_line(&mut scratch).map(|_| ())
}
