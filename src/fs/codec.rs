use chrono::NaiveDateTime;

use crate::error::{Result, TaskError};
use crate::models::datetime;
use crate::models::task::{Task, TaskKind};

/// Append a decode problem to the debug log file.
pub(crate) fn log_decode_error(error_msg: &str, record: &str) {
    use std::fs::OpenOptions;
    use std::io::Write;

    let path = std::env::temp_dir().join("taskline_debug.log");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(
            file,
            "[{}] Record decode error: {}",
            chrono::Local::now().format("%H:%M:%S"),
            error_msg
        );
        let _ = writeln!(file, "  {}", record);
    }
}

/// Encode one task as a pipe-delimited record:
/// `TYPE | done(0/1) | desc [| timestamp [| timestamp]]`.
pub fn encode(task: &Task) -> String {
    let done = if task.is_done() { 1 } else { 0 };
    match task.kind() {
        TaskKind::Todo => format!("T | {} | {}", done, task.description()),
        TaskKind::Deadline { due } => format!(
            "D | {} | {} | {}",
            done,
            task.description(),
            datetime::format_stored(due)
        ),
        TaskKind::Event { from, to } => format!(
            "E | {} | {} | {} | {}",
            done,
            task.description(),
            datetime::format_stored(from),
            datetime::format_stored(to)
        ),
    }
}

/// Decode one stored record. Fields are split on `|` with surrounding
/// whitespace trimmed. Structural problems (missing fields, unknown type
/// letter, empty description) fail as `MalformedRecord`; an unreadable
/// timestamp only degrades to the epoch sentinel so the task itself is
/// never dropped.
pub fn decode(line: &str) -> Result<Task> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    if fields.len() < 3 {
        return Err(TaskError::MalformedRecord(format!(
            "expected at least 3 fields, got {}",
            fields.len()
        )));
    }

    let description = fields[2];
    if description.is_empty() {
        return Err(TaskError::MalformedRecord("empty description".into()));
    }

    let kind = match fields[0] {
        "T" => TaskKind::Todo,
        "D" => {
            if fields.len() < 4 {
                return Err(TaskError::MalformedRecord("deadline missing time".into()));
            }
            TaskKind::Deadline {
                due: timestamp_or_sentinel(fields[3], line),
            }
        }
        "E" => {
            if fields.len() < 5 {
                return Err(TaskError::MalformedRecord("event missing times".into()));
            }
            TaskKind::Event {
                from: timestamp_or_sentinel(fields[3], line),
                to: timestamp_or_sentinel(fields[4], line),
            }
        }
        other => {
            return Err(TaskError::MalformedRecord(format!(
                "unknown task type '{}'",
                other
            )));
        }
    };

    let mut task = Task::new(description, kind);
    task.set_done(fields[1] == "1");
    Ok(task)
}

fn timestamp_or_sentinel(field: &str, record: &str) -> NaiveDateTime {
    match datetime::parse_stored(field) {
        Some(dt) => dt,
        None => {
            log_decode_error(
                &format!("unreadable timestamp '{}', substituting epoch", field),
                record,
            );
            datetime::epoch_sentinel()
        }
    }
}
