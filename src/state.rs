//! The persisted tailoring state and the store that guards it.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::environment::Environment;
use crate::error::{TailorError, TailorResult};

const NOT_TAILORED_TOKEN: &str = "not-tailored";
const UNDEFINED_TOKEN: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailoringState {
    NotTailored,
    /// A destructive run started and has not finished.
    Undefined,
    TailoredFor(Environment),
}

impl TailoringState {
    pub fn token(self) -> &'static str {
        match self {
            TailoringState::NotTailored => NOT_TAILORED_TOKEN,
            TailoringState::Undefined => UNDEFINED_TOKEN,
            TailoringState::TailoredFor(env) => env.name(),
        }
    }

    /// Parses a persisted token. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> TailorResult<Self> {
        let token = raw.trim();
        match token {
            NOT_TAILORED_TOKEN => Ok(TailoringState::NotTailored),
            UNDEFINED_TOKEN => Ok(TailoringState::Undefined),
            other => Environment::from_name(other)
                .map(TailoringState::TailoredFor)
                .ok_or_else(|| TailorError::InconsistentState {
                    token: other.to_string(),
                }),
        }
    }
}

impl fmt::Display for TailoringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TailoringState::NotTailored => f.write_str("not tailored"),
            TailoringState::Undefined => f.write_str("undefined"),
            TailoringState::TailoredFor(env) => {
                write!(f, "tailored for {} ({})", env, env.description())
            }
        }
    }
}

/// Persistence for the single [`TailoringState`] value.
pub trait StateStore {
    fn read(&self) -> TailorResult<TailoringState>;
    fn write(&mut self, state: TailoringState) -> TailorResult<()>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn read(&self) -> TailorResult<TailoringState> {
        (**self).read()
    }

    fn write(&mut self, state: TailoringState) -> TailorResult<()> {
        (**self).write(state)
    }
}

/// State kept in a plain text file holding one token.
///
/// The file is never created here; it ships with the package.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file in place. Only the file itself needs to be
    /// writable, which is exactly what `read` checks.
    fn overwrite(&self, content: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(content)?;
        file.sync_all()
    }
}

impl StateStore for FileStateStore {
    /// Reads the state. The file must be both readable and writable, since
    /// every read may be followed by a write.
    fn read(&self) -> TailorResult<TailoringState> {
        let access_error = |source| TailorError::Access {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(access_error)?;

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(access_error)?;

        let state = TailoringState::parse(&content)?;
        debug!(path = %self.path.display(), state = state.token(), "read tailoring state");
        Ok(state)
    }

    fn write(&mut self, state: TailoringState) -> TailorResult<()> {
        self.overwrite(state.token().as_bytes())
            .map_err(|source| TailorError::StateWrite {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), state = state.token(), "wrote tailoring state");
        Ok(())
    }
}
