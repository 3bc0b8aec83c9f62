use anyhow::Result;
use std::env;

use crate::config;
use crate::fs::Storage;

/// Handle one-shot CLI commands.
/// Returns true when the interactive session should start, false when the
/// command was fully handled here.
pub fn handle_cli() -> Result<bool> {
    let args: Vec<String> = env::args().collect();

    // No arguments: interactive mode
    if args.len() < 2 {
        return Ok(true);
    }

    match args[1].as_str() {
        "list" => {
            cli_list()?;
            Ok(false)
        }
        "config" => {
            if args.len() < 3 {
                config::show_config()?;
            } else {
                match args[2].as_str() {
                    "show" => config::show_config()?,
                    "file" => {
                        if args.len() < 4 {
                            eprintln!("Usage: tsk config file <path>");
                            std::process::exit(1);
                        }
                        config::set_data_file(args[3].clone())?;
                    }
                    _ => {
                        eprintln!("Unknown config option: {}", args[2]);
                        eprintln!("Available options: show, file");
                        std::process::exit(1);
                    }
                }
            }
            Ok(false)
        }
        "--help" | "-h" => {
            print_help();
            Ok(false)
        }
        "--version" | "-V" | "-v" => {
            print_version();
            Ok(false)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!("Use 'tsk --help' for usage");
            std::process::exit(1);
        }
    }
}

/// Print the stored tasks once, without entering the session.
fn cli_list() -> Result<()> {
    let config = config::load_config()?;
    let tasks = Storage::new(config.data_file).load()?;

    if tasks.is_empty() {
        println!("No tasks yet.");
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {}", i + 1, task.display());
    }

    Ok(())
}

fn print_help() {
    println!("Taskline (tsk) - a line-command personal task tracker\n");
    println!("USAGE:");
    println!("  tsk                     Start the interactive session");
    println!("  tsk list                Print the stored tasks and exit");
    println!("  tsk config [show]       Show current configuration");
    println!("  tsk config file <path>  Set the task file location");
    println!("  tsk --help              Show this help");
    println!("  tsk --version           Show version\n");
    println!("SESSION COMMANDS:");
    println!("  list                                    show tasks");
    println!("  todo <desc>                             add an undated task");
    println!("  deadline <desc> /by <when>              add a deadline");
    println!("  event <desc> /from <start> /to <end>    add an event");
    println!("  mark <n> / unmark <n>                   toggle completion");
    println!("  delete <n>                              remove a task");
    println!("  find <keyword>                          search descriptions");
    println!("  bye                                     exit\n");
    println!("Dates accept yyyy-MM-dd[ HHmm] or d/M/yyyy[ HHmm].");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const NAME: &str = env!("CARGO_PKG_NAME");
    println!("{} {}", NAME, VERSION);
}
