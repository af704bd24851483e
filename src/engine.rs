//! The tailoring state machine.
//!
//! A run reads the persisted state once, decides whether tailoring may
//! proceed, and only then touches the filesystem. The state is set to
//! `undefined` before the first deletion and to the target environment after
//! the last one, so a run that dies halfway is visible to the next one.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{Layout, Options};
use crate::environment::Environment;
use crate::error::{TailorError, TailorResult};
use crate::locate::DependencyLocator;
use crate::scan::{FileEnumerator, ScannedFile, WalkDirEnumerator};
use crate::state::{FileStateStore, StateStore, TailoringState};

/// What the persisted state allows for a requested environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    AlreadyTailored(Environment),
    Proceed(Environment),
}

/// Evaluates the state table. Never touches the filesystem.
pub fn decide(state: TailoringState, requested: Option<Environment>) -> TailorResult<Decision> {
    match (state, requested) {
        (TailoringState::Undefined, _) => Err(TailorError::UndefinedState),
        (TailoringState::TailoredFor(current), Some(requested)) if current != requested => {
            Err(TailorError::Conflict { current, requested })
        }
        (TailoringState::TailoredFor(current), _) => Ok(Decision::AlreadyTailored(current)),
        (TailoringState::NotTailored, None) => Err(TailorError::NoEnvironmentSelected),
        (TailoringState::NotTailored, Some(env)) => Ok(Decision::Proceed(env)),
    }
}

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AlreadyTailored(Environment),
    DryRun {
        environment: Environment,
        candidates: Vec<PathBuf>,
    },
    Tailored {
        environment: Environment,
        deleted: Vec<PathBuf>,
    },
}

pub struct Tailor<S, E> {
    store: S,
    enumerator: E,
    locator: DependencyLocator,
}

impl Tailor<FileStateStore, WalkDirEnumerator> {
    /// Engine wired to the real state file and dependency tree of `layout`.
    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(
            FileStateStore::new(&layout.state_file),
            WalkDirEnumerator::new(),
            DependencyLocator::for_layout(layout),
        )
    }
}

impl<S: StateStore, E: FileEnumerator> Tailor<S, E> {
    pub fn new(store: S, enumerator: E, locator: DependencyLocator) -> Self {
        Self {
            store,
            enumerator,
            locator,
        }
    }

    pub fn run(&mut self, options: &Options) -> TailorResult<Outcome> {
        let state = self.store.read()?;
        let environment = match decide(state, options.environment)? {
            Decision::AlreadyTailored(env) => {
                info!(environment = %env, "module already tailored");
                return Ok(Outcome::AlreadyTailored(env));
            }
            Decision::Proceed(env) => env,
        };

        let root = self.locator.locate()?;
        let files = self.enumerator.enumerate(&root)?;
        let candidates = environment.select(&files);
        debug!(
            environment = %environment,
            files = files.len(),
            candidates = candidates.len(),
            "selected files for deletion"
        );

        if options.dry_run {
            for candidate in &candidates {
                check_access(&candidate.path)?;
            }
            return Ok(Outcome::DryRun {
                environment,
                candidates: candidates.into_iter().map(|c| c.path).collect(),
            });
        }

        warn!("entering undefined state until all deletions finish");
        self.store.write(TailoringState::Undefined)?;

        let mut deleted = Vec::with_capacity(candidates.len());
        for ScannedFile { path, .. } in candidates {
            fs::remove_file(&path).map_err(|source| TailorError::Deletion {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "deleted");
            deleted.push(path);
        }

        self.store.write(TailoringState::TailoredFor(environment))?;
        info!(environment = %environment, deleted = deleted.len(), "tailoring complete");

        Ok(Outcome::Tailored {
            environment,
            deleted,
        })
    }
}

fn check_access(path: &Path) -> TailorResult<()> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| TailorError::Access {
            path: path.to_path_buf(),
            source,
        })
}
