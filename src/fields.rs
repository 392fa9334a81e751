//! Enumerations used to categorise and select tasks.
//!
//! `Status` is persisted with every task; `ListFilter` only exists on the command line.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a task. New tasks always start as `Todo`.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Ongoing,
    Done,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Ongoing => "ongoing",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tasks `--list` prints.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Done,
    Todo,
    Ongoing,
}

impl ListFilter {
    /// Whether a task with `status` belongs in the listing.
    pub fn matches(self, status: Status) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Done => status == Status::Done,
            ListFilter::Todo => status == Status::Todo,
            ListFilter::Ongoing => status == Status::Ongoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Ongoing).unwrap(), "\"ongoing\"");
        let parsed: Status = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Status::Done);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<Status>("\"blocked\"").is_err());
        assert!(serde_json::from_str::<Status>("\"Todo\"").is_err());
    }

    #[rstest]
    #[case(ListFilter::All, Status::Todo, true)]
    #[case(ListFilter::All, Status::Done, true)]
    #[case(ListFilter::Todo, Status::Todo, true)]
    #[case(ListFilter::Todo, Status::Ongoing, false)]
    #[case(ListFilter::Ongoing, Status::Ongoing, true)]
    #[case(ListFilter::Ongoing, Status::Done, false)]
    #[case(ListFilter::Done, Status::Done, true)]
    #[case(ListFilter::Done, Status::Todo, false)]
    fn test_filter_matches(#[case] filter: ListFilter, #[case] status: Status, #[case] expected: bool) {
        assert_eq!(filter.matches(status), expected);
    }
}
