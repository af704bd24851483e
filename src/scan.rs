//! Recursive file listing with path normalization.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TailorError, TailorResult};

/// How the host spells paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Forward slashes, case-sensitive. Paths pass through untouched.
    Unix,
    /// Backslashes, case-insensitive. Paths are lower-cased and slashes flipped.
    Windows,
}

impl PathStyle {
    pub fn host() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Unix
        }
    }
}

/// Brings a path into the form the environment predicates match against.
pub fn normalize_path(path: &str, style: PathStyle) -> String {
    match style {
        PathStyle::Unix => path.to_string(),
        PathStyle::Windows => path.replace('\\', "/").to_lowercase(),
    }
}

/// A file found by enumeration.
///
/// `path` is what gets opened and deleted; `normalized` is only for
/// classification and may be lossy for names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub normalized: String,
}

impl ScannedFile {
    pub fn new(path: impl Into<PathBuf>, style: PathStyle) -> Self {
        let path = path.into();
        let normalized = normalize_path(&path.to_string_lossy(), style);
        Self { path, normalized }
    }
}

impl AsRef<str> for ScannedFile {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

/// Lists every regular file beneath a root.
pub trait FileEnumerator {
    fn enumerate(&self, root: &Path) -> TailorResult<Vec<ScannedFile>>;
}

#[derive(Debug, Clone)]
pub struct WalkDirEnumerator {
    style: PathStyle,
}

impl WalkDirEnumerator {
    pub fn new() -> Self {
        Self::with_style(PathStyle::host())
    }

    pub fn with_style(style: PathStyle) -> Self {
        Self { style }
    }
}

impl Default for WalkDirEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FileEnumerator for WalkDirEnumerator {
    fn enumerate(&self, root: &Path) -> TailorResult<Vec<ScannedFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| TailorError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_file() {
                files.push(ScannedFile::new(entry.into_path(), self.style));
            }
        }

        debug!(root = %root.display(), count = files.len(), "enumerated files");
        Ok(files)
    }
}
