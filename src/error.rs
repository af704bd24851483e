use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::environment::Environment;

/// Main error type for tailoring operations
#[derive(Error, Debug)]
pub enum TailorError {
    #[error("Cannot access {path:?} for reading and writing")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Inconsistent tailoring state {token:?}: not a known state")]
    InconsistentState { token: String },

    #[error("Module was left in an undefined state by an interrupted run, reinstall it")]
    UndefinedState,

    #[error("Module is already tailored for {current}, cannot tailor it for {requested}")]
    Conflict {
        current: Environment,
        requested: Environment,
    },

    #[error("Dependency directory not found, tried: {}", format_candidates(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    #[error("No environment specified")]
    NoEnvironmentSelected,

    #[error("Failed to delete {path:?}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list files under {root:?}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write tailoring state to {path:?}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|c| c.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for tailoring operations
pub type TailorResult<T> = Result<T, TailorError>;
