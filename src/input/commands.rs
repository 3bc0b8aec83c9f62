use chrono::NaiveDateTime;

/// One validated user instruction, ready to run against the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,
    /// Show every task.
    List,
    /// Add an undated task.
    AddTodo(String),
    /// Add a task due by a point in time.
    AddDeadline {
        description: String,
        due: NaiveDateTime,
    },
    /// Add a task spanning a start and an end.
    AddEvent {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// Mark the n-th task done.
    Mark(usize),
    /// Mark the n-th task not done.
    Unmark(usize),
    /// Remove the n-th task.
    Delete(usize),
    /// Case-insensitive description search.
    Find(String),
}
