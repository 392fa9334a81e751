//! Command implementations for the CLI interface.
//!
//! `perform_action` dispatches the parsed `Action` to one handler. Handlers print the
//! user-facing confirmation lines; failures are returned to `main`, which reports them.

use clap_complete::{generate, Shell};

use crate::cli::Action;
use crate::db::print_table;
use crate::error::Result;
use crate::fields::{ListFilter, Status};
use crate::store::{parse_id_arg, TaskStore, UpdateRequest};

pub fn perform_action(store: &TaskStore, action: Action) -> Result<()> {
    match action {
        Action::Add(description) => cmd_add(store, &description),
        Action::Update(values) => cmd_update(store, &values),
        Action::Remove(id) => cmd_remove(store, &id),
        Action::Mark(id, status) => cmd_mark(store, &id, status),
        Action::List(filter) => cmd_list(store, filter),
        Action::Completions(shell) => {
            cmd_completions(shell);
            Ok(())
        }
        Action::Unknown => {
            tracing::debug!("no action selected");
            Ok(())
        }
    }
}

pub fn cmd_add(store: &TaskStore, description: &str) -> Result<()> {
    let id = store.add(description)?;
    println!("Task added successfully (ID: {id})");
    Ok(())
}

pub fn cmd_update(store: &TaskStore, values: &[String]) -> Result<()> {
    let request = UpdateRequest::from_args(values)?;
    store.update(&request)?;
    println!("Task updated successfully (ID: {})", request.id);
    Ok(())
}

pub fn cmd_remove(store: &TaskStore, id: &str) -> Result<()> {
    let id = store.remove(id)?;
    println!("Task deleted successfully (ID: {id})");
    Ok(())
}

pub fn cmd_mark(store: &TaskStore, id: &str, status: Status) -> Result<()> {
    let id = parse_id_arg(id)?;
    store.set_status(id, status)?;
    println!("Task marked as {status} (ID: {id})");
    Ok(())
}

pub fn cmd_list(store: &TaskStore, filter: ListFilter) -> Result<()> {
    let tasks = store.list(filter)?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    let rows: Vec<_> = tasks.iter().map(|(id, t)| (*id, t)).collect();
    print_table(&rows);
    Ok(())
}

pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use tempfile::tempdir;

    #[test]
    fn test_unknown_action_does_not_touch_store() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));
        perform_action(&store, Action::Unknown).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_invalid_update_is_rejected_before_load() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        let err = perform_action(&store, Action::Update(vec!["x".into(), "text".into()])).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
        let err = perform_action(&store, Action::Update(vec!["0".into()])).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_mark_requires_numeric_id() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));
        let err = perform_action(&store, Action::Mark("first".into(), Status::Done)).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_dispatch_applies_mutations() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        perform_action(&store, Action::Add("write tests".into())).unwrap();
        perform_action(&store, Action::Mark("0".into(), Status::Ongoing)).unwrap();
        perform_action(&store, Action::List(ListFilter::Ongoing)).unwrap();

        let db = store.load().unwrap();
        assert_eq!(db.get(0).unwrap().status, Status::Ongoing);
    }
}
