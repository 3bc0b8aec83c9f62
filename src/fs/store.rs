use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::codec;
use crate::models::task::Task;

/// The backing store: one task per line in a UTF-8 text file.
pub struct Storage {
    file: PathBuf,
}

impl Storage {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Read all tasks. An absent file is created empty. Blank lines are
    /// skipped; lines that fail to decode are logged and skipped, so a
    /// corrupt file never prevents startup.
    pub fn load(&self) -> Result<Vec<Task>> {
        self.ensure_parent_dir()?;

        if !self.file.exists() {
            fs::write(&self.file, "")?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file)?;
        let mut tasks = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(line) {
                Ok(task) => tasks.push(task),
                Err(e) => codec::log_decode_error(&e.to_string(), line),
            }
        }

        Ok(tasks)
    }

    /// Rewrite the whole file from the given list (truncate-and-rewrite).
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut out = String::new();
        for task in tasks {
            out.push_str(&codec::encode(task));
            out.push('\n');
        }
        fs::write(&self.file, out)?;

        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
