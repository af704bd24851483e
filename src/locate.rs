use std::path::PathBuf;

use tracing::debug;

use crate::config::Layout;
use crate::error::{TailorError, TailorResult};

/// Finds the dependency directory along a fixed search path.
#[derive(Debug, Clone)]
pub struct DependencyLocator {
    candidates: Vec<PathBuf>,
}

impl DependencyLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.dependency_candidates.clone())
    }

    /// Returns the first candidate that exists as a directory.
    pub fn locate(&self) -> TailorResult<PathBuf> {
        for candidate in &self.candidates {
            if candidate.is_dir() {
                debug!(path = %candidate.display(), "located dependency");
                return Ok(candidate.clone());
            }
            debug!(path = %candidate.display(), "dependency candidate missing");
        }

        Err(TailorError::NotFound {
            candidates: self.candidates.clone(),
        })
    }
}
