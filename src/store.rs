//! File-backed task store.
//!
//! A `TaskStore` is a handle on one task file. Every operation runs a full cycle:
//! load the document, apply one change or query, and write the document back only
//! when something changed. Nothing is cached between calls.
//!
//! The file is not locked. Two processes writing at once race and the last rename wins.

use std::path::{Path, PathBuf};

use crate::db::Database;
use crate::error::{Result, TrackerError};
use crate::fields::{ListFilter, Status};
use crate::task::{self, parse_task_id, Task, TaskId};

/// Handle on the task file at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

/// A validated `--update` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: TaskId,
    pub description: String,
}

impl UpdateRequest {
    /// Validate the raw `<id> <description>` values given to `--update`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let [id, description] = args else {
            return Err(TrackerError::InvalidInput(
                "update expects an ID and a description".to_string(),
            ));
        };
        let id = parse_id_arg(id)?;
        let description = validate_description(description)?;
        Ok(UpdateRequest { id, description })
    }
}

/// Parse an identifier given on the command line.
pub fn parse_id_arg(raw: &str) -> Result<TaskId> {
    parse_task_id(raw)
        .ok_or_else(|| TrackerError::InvalidInput(format!("'{raw}' is not a task ID")))
}

fn validate_description(description: &str) -> Result<String> {
    if description.trim().is_empty() {
        return Err(TrackerError::InvalidInput(
            "description cannot be empty".to_string(),
        ));
    }
    Ok(description.to_string())
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current document, creating an empty file on first use.
    pub fn load(&self) -> Result<Database> {
        Database::load(&self.path)
    }

    /// Add a `todo` task and return its identifier.
    #[tracing::instrument(skip(self))]
    pub fn add(&self, description: &str) -> Result<TaskId> {
        let description = validate_description(description)?;
        let mut db = self.load()?;
        let id = db.insert(Task::new(description, task::now()))?;
        db.save(&self.path)?;
        tracing::info!(id, "task added");
        Ok(id)
    }

    /// Replace a task's description. The file is only written when the task exists.
    #[tracing::instrument(skip(self))]
    pub fn update(&self, request: &UpdateRequest) -> Result<()> {
        let mut db = self.load()?;
        let Some(t) = db.get_mut(request.id) else {
            return Err(TrackerError::NotFound(request.id.to_string()));
        };
        t.description = request.description.clone();
        t.touch(task::now());
        db.save(&self.path)?;
        tracing::info!(id = request.id, "task updated");
        Ok(())
    }

    /// Move a task to `status`. Same contract as `update`.
    #[tracing::instrument(skip(self))]
    pub fn set_status(&self, id: TaskId, status: Status) -> Result<()> {
        let mut db = self.load()?;
        let Some(t) = db.get_mut(id) else {
            return Err(TrackerError::NotFound(id.to_string()));
        };
        t.status = status;
        t.touch(task::now());
        db.save(&self.path)?;
        tracing::info!(id, %status, "task status changed");
        Ok(())
    }

    /// Delete the task keyed by `raw_id`.
    ///
    /// `raw_id` is matched against the keys as written in the file, so text that is
    /// not a canonical identifier simply does not exist.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, raw_id: &str) -> Result<TaskId> {
        let mut db = self.load()?;
        let Some(id) = parse_task_id(raw_id).filter(|id| db.get(*id).is_some()) else {
            return Err(TrackerError::NotFound(raw_id.to_string()));
        };
        db.remove(id);
        db.save(&self.path)?;
        tracing::info!(id, "task removed");
        Ok(id)
    }

    /// Tasks matching `filter`, in identifier order.
    pub fn list(&self, filter: ListFilter) -> Result<Vec<(TaskId, Task)>> {
        let db = self.load()?;
        Ok(db
            .filter(filter)
            .into_iter()
            .map(|(id, t)| (id, t.clone()))
            .collect())
    }
}
