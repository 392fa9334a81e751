use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary task file
pub struct CliTestHarness {
    _temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("res").join("tasks.json");

        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// Get a Command instance pointed at this harness's task file
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("task-tracker").expect("Failed to find task-tracker binary");
        cmd.env_remove("TASK_TRACKER_DB");
        cmd.arg("--db").arg(&self.db_path);
        cmd
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Parse the task file as plain JSON
    pub fn document(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(&self.db_path).expect("task file should exist");
        serde_json::from_str(&text).expect("task file should be valid JSON")
    }
}
