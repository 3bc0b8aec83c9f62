use chrono::NaiveDateTime;

use crate::models::datetime;

/// What kind of task this is, with any time fields the kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// No time information.
    Todo,
    /// Due by a single point in time.
    Deadline { due: NaiveDateTime },
    /// Spans a start and an end (no ordering enforced between them).
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

impl TaskKind {
    /// One-letter discriminant used in display brackets and stored records.
    pub fn type_letter(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// One trackable item. The description is validated non-empty at creation
/// and never changes; only the done flag is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        let description = description.into();
        debug_assert!(!description.trim().is_empty());
        Self {
            description,
            done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// `[T][ ] read book`, `[D][X] return book (by: Oct 15 2019)`, etc.
    pub fn display(&self) -> String {
        let status = if self.done { "[X]" } else { "[ ]" };
        let extra = match &self.kind {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { due } => {
                format!(" (by: {})", datetime::format_display(due))
            }
            TaskKind::Event { from, to } => format!(
                " (from: {} to: {})",
                datetime::format_display(from),
                datetime::format_display(to)
            ),
        };
        format!(
            "[{}]{} {}{}",
            self.kind.type_letter(),
            status,
            self.description,
            extra
        )
    }

    /// Case-insensitive substring match against the description.
    pub fn matches(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
