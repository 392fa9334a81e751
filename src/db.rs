//! The task document and its file representation.
//!
//! `Database` is the in-memory form of the task file: one top-level `tasks` key holding
//! the identifier to task map. This module also owns the helpers that render tasks as
//! the table printed by `--list`.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::fields::ListFilter;
use crate::task::{Task, TaskId};

/// In-memory copy of the task file.
///
/// Keys are integers here and decimal strings on disk; serde_json converts at the
/// boundary. Iteration is in ascending identifier order, which is also the order
/// tasks were added in since identifiers only grow. A hand-edited file with keys out
/// of order is still listed in ascending order, and is rewritten that way on save.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Database {
    pub tasks: BTreeMap<TaskId, Task>,
}

impl Database {
    /// Load the document at `path`, first creating an empty one (and its directory)
    /// if the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                create_empty(path)?;
                fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?
            }
            Err(e) => return Err(TrackerError::io(path, e)),
        };
        serde_json::from_str(&buf).map_err(|source| TrackerError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the whole document to `path` using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        let mut f = fs::File::create(&tmp).map_err(|e| TrackerError::io(&tmp, e))?;
        let written = f.write_all(data.as_bytes()).and_then(|_| f.flush());
        drop(f);
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(TrackerError::io(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(TrackerError::io(path, e));
        }
        tracing::debug!(path = %path.display(), tasks = self.tasks.len(), "saved task file");
        Ok(())
    }

    /// Next free identifier: one past the largest in use, or 0 for an empty store.
    /// `None` once the largest identifier is `u64::MAX`.
    pub fn next_id(&self) -> Option<TaskId> {
        match self.tasks.keys().next_back() {
            Some(id) => id.checked_add(1),
            None => Some(0),
        }
    }

    /// Get a task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Insert `task` under the next free identifier and return that identifier.
    pub fn insert(&mut self, task: Task) -> Result<TaskId> {
        let id = self
            .next_id()
            .ok_or_else(|| TrackerError::InvalidInput("task ID space exhausted".to_string()))?;
        self.tasks.insert(id, task);
        Ok(id)
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }

    /// Tasks selected by `filter`, in identifier order.
    pub fn filter(&self, filter: ListFilter) -> Vec<(TaskId, &Task)> {
        self.tasks
            .iter()
            .filter(|(_, t)| filter.matches(t.status))
            .map(|(&id, t)| (id, t))
            .collect()
    }
}

fn create_empty(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| TrackerError::io(dir, e))?;
    }
    let data = serde_json::to_string_pretty(&Database::default())?;
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut f) => {
            f.write_all(data.as_bytes()).map_err(|e| TrackerError::io(path, e))?;
            tracing::info!(path = %path.display(), "created empty task file");
            Ok(())
        }
        // Someone else created it between our read and now; use theirs.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(TrackerError::io(path, e)),
    }
}

/// Format a stored timestamp in local time for display.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render the header and one line per task.
pub fn table_lines(rows: &[(TaskId, &Task)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:<5} {:<8} {:<19} {:<19} {}",
        "ID", "Status", "Created", "Updated", "Description"
    ));
    for (id, t) in rows {
        lines.push(format!(
            "{:<5} {:<8} {:<19} {:<19} {}",
            id,
            t.status.as_str(),
            format_timestamp(&t.created_at),
            format_timestamp(&t.updated_at),
            truncate(&t.description, 60)
        ));
    }
    lines
}

/// Print tasks in a formatted table.
pub fn print_table(rows: &[(TaskId, &Task)]) {
    for line in table_lines(rows) {
        println!("{line}");
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
