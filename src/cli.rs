use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use clap_complete::Shell;

use crate::fields::{ListFilter, Status};

/// Default location of the task file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "res/tasks.json";

/// Simple, file-backed task tracker.
/// Each invocation performs at most one action; the action flags are mutually exclusive.
#[derive(Parser, Debug)]
#[command(name = "task-tracker", version, about = "A simple app for tracking tasks")]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, env = "TASK_TRACKER_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Add a new task.
    #[arg(short, long, group = "action", value_name = "DESCRIPTION")]
    pub add: Option<String>,

    /// Replace the description of a task.
    #[arg(short, long, group = "action", num_args = 1..=2, value_names = ["ID", "DESCRIPTION"])]
    pub update: Option<Vec<String>>,

    /// Remove a task.
    #[arg(short, long, group = "action", value_name = "ID")]
    pub remove: Option<String>,

    /// Mark a task as ongoing.
    #[arg(short, long, group = "action", value_name = "ID")]
    pub ongoing: Option<String>,

    /// Mark a task as done.
    #[arg(short, long, group = "action", value_name = "ID")]
    pub done: Option<String>,

    /// List tasks: all | done | todo | ongoing.
    #[arg(short, long, group = "action", value_enum, value_name = "FILTER")]
    pub list: Option<ListFilter>,

    /// Print a shell completion script.
    #[arg(long, group = "action", value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// The single operation selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    /// Raw values; validated before the store is touched.
    Update(Vec<String>),
    Remove(String),
    Mark(String, Status),
    List(ListFilter),
    Completions(Shell),
    Unknown,
}

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(description) = &self.add {
            Action::Add(description.clone())
        } else if let Some(values) = &self.update {
            Action::Update(values.clone())
        } else if let Some(id) = &self.remove {
            Action::Remove(id.clone())
        } else if let Some(id) = &self.ongoing {
            Action::Mark(id.clone(), Status::Ongoing)
        } else if let Some(id) = &self.done {
            Action::Mark(id.clone(), Status::Done)
        } else if let Some(filter) = self.list {
            Action::List(filter)
        } else if let Some(shell) = self.completions {
            Action::Completions(shell)
        } else {
            // The argument group already prevents this, but stay total.
            Action::Unknown
        }
    }
}
