use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Task with ID {0} does not exist")]
    NotFound(String),

    #[error("Cannot access task file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Task file {} is not a valid task document: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error. Usage errors share clap's code 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::NotFound(_) => 1,
            TrackerError::InvalidInput(_) => 2,
            TrackerError::Io { .. } | TrackerError::Corrupt { .. } | TrackerError::Encode(_) => 3,
        }
    }
}
