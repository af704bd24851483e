//! Target runtimes and the file classification rules that go with them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// `addon_46.node`: a trailing two-digit ABI tag before a single extension
static ABI_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_([0-9]{2})\.[^./]+$").expect("Failed to compile ABI tag pattern")
});

// 32-bit builds live directly under a `lib` or `linux-x86-32` directory
static THIRTY_TWO_BIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:lib|linux-x86-32)/[^/]+$").expect("Failed to compile 32-bit path pattern")
});

/// A deployment target the dependency can be tailored for.
///
/// Each variant keeps exactly one ABI-tagged build of every native binary;
/// the token returned by [`Environment::name`] is what gets persisted in the
/// state file and what the command line flag is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    LambdaNode4,
    LambdaNode6,
}

impl Environment {
    pub fn all() -> &'static [Environment] {
        &[Environment::LambdaNode4, Environment::LambdaNode6]
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::LambdaNode4 => "lambda-node4",
            Environment::LambdaNode6 => "lambda-node6",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Environment::LambdaNode4 => "AWS Lambda, Node.js 4.3 (ABI 46)",
            Environment::LambdaNode6 => "AWS Lambda, Node.js 6.10 (ABI 48)",
        }
    }

    /// The ABI tag whose binaries survive tailoring.
    pub fn kept_abi_tag(self) -> &'static str {
        match self {
            Environment::LambdaNode4 => "46",
            Environment::LambdaNode6 => "48",
        }
    }

    pub fn from_name(name: &str) -> Option<Environment> {
        Self::all().iter().copied().find(|env| env.name() == name)
    }

    /// Returns true when `path` is not needed on this environment.
    ///
    /// Classification is by name only and never touches the filesystem.
    /// `path` must already be normalized to forward slashes (see
    /// [`crate::scan::normalize_path`]).
    pub fn should_delete(self, path: &str) -> bool {
        if THIRTY_TWO_BIT_PATTERN.is_match(path) {
            return true;
        }

        match ABI_TAG_PATTERN.captures(path) {
            Some(captures) => &captures[1] != self.kept_abi_tag(),
            None => false,
        }
    }

    /// Applies [`Environment::should_delete`] to a file list, keeping its order.
    pub fn select<T>(self, files: &[T]) -> Vec<T>
    where
        T: AsRef<str> + Clone,
    {
        files
            .iter()
            .filter(|file| self.should_delete(file.as_ref()))
            .cloned()
            .collect()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
