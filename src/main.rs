use anyhow::Result;
use std::io::{self, BufRead};

mod cli;
mod config;
mod error;
mod fs;
mod input;
mod models;
mod ui;

use input::Outcome;
use models::TaskList;

fn main() -> Result<()> {
    let should_run_session = cli::handle_cli()?;
    if !should_run_session {
        return Ok(());
    }

    let config = config::load_config()?;
    let mut tasks = TaskList::new(fs::Storage::new(config.data_file));

    // Corrupt lines are already skipped inside load; only a real I/O failure
    // lands here, and it degrades to an empty list instead of aborting.
    if let Err(e) = tasks.reload() {
        ui::error(&format!("Failed to load file: {}", e));
    }

    ui::greet();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match input::handle(line, &mut tasks) {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => ui::render(&outcome),
            Err(e) => ui::error(&e.to_string()),
        }
    }

    ui::bye();
    Ok(())
}
