pub mod commands;
pub mod parser;

pub use commands::Command;

use crate::error::Result;
use crate::models::{Task, TaskKind, TaskList};

/// Structured result of one executed command, ready for rendering.
/// Display strings are pre-built so the presentation layer never touches
/// the task model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Listed(Vec<String>),
    Added { task: String, total: usize },
    Removed { task: String, total: usize },
    Toggled { task: String, done: bool },
    Matches(Vec<String>),
}

/// Parse one trimmed, non-empty input line and run it against the list.
pub fn handle(line: &str, tasks: &mut TaskList) -> Result<Outcome> {
    execute(parser::parse(line)?, tasks)
}

fn execute(command: Command, tasks: &mut TaskList) -> Result<Outcome> {
    match command {
        Command::Exit => Ok(Outcome::Exit),
        Command::List => Ok(Outcome::Listed(
            tasks.all().iter().map(Task::display).collect(),
        )),
        Command::AddTodo(description) => add(Task::new(description, TaskKind::Todo), tasks),
        Command::AddDeadline { description, due } => {
            add(Task::new(description, TaskKind::Deadline { due }), tasks)
        }
        Command::AddEvent {
            description,
            from,
            to,
        } => add(Task::new(description, TaskKind::Event { from, to }), tasks),
        Command::Mark(n) => toggle(n, true, tasks),
        Command::Unmark(n) => toggle(n, false, tasks),
        Command::Delete(n) => {
            let (task, total) = tasks.remove(n)?;
            Ok(Outcome::Removed {
                task: task.display(),
                total,
            })
        }
        Command::Find(keyword) => Ok(Outcome::Matches(
            tasks.find(&keyword).iter().map(|t| t.display()).collect(),
        )),
    }
}

fn add(task: Task, tasks: &mut TaskList) -> Result<Outcome> {
    let display = task.display();
    let total = tasks.add(task)?;
    Ok(Outcome::Added {
        task: display,
        total,
    })
}

fn toggle(n: usize, done: bool, tasks: &mut TaskList) -> Result<Outcome> {
    let task = tasks.toggle(n, done)?;
    Ok(Outcome::Toggled {
        task: task.display(),
        done,
    })
}
