use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{DEPENDENCY_NAME, STATE_FILE_NAME};

/// Where the tool finds its state file and the dependency to tailor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub package_dir: PathBuf,
    pub state_file: PathBuf,
    pub dependency_candidates: Vec<PathBuf>,
}

impl Layout {
    pub fn new(package_dir: impl AsRef<Path>) -> Self {
        let package_dir = package_dir.as_ref().to_path_buf();
        let state_file = package_dir.join(STATE_FILE_NAME);

        // nested install first, then the sibling left by a flattened tree
        let dependency_candidates = vec![
            package_dir.join("node_modules").join(DEPENDENCY_NAME),
            package_dir.join("..").join(DEPENDENCY_NAME),
        ];

        Self {
            package_dir,
            state_file,
            dependency_candidates,
        }
    }

    /// Layout rooted at the directory holding the running executable.
    pub fn from_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let package_dir = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Executable path has no parent: {}", exe.display()))?;

        Ok(Self::new(package_dir))
    }
}
