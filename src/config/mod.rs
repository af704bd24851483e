pub mod layout;

pub use layout::Layout;

/// Name of the file, in the package directory, holding the tailoring state.
pub const STATE_FILE_NAME: &str = "tailoring.state";

/// The npm dependency whose prebuilt binaries get pruned.
pub const DEPENDENCY_NAME: &str = "prebuilt-addon";

/// Run configuration, fixed once the command line has been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub environment: Option<crate::Environment>,
    pub dry_run: bool,
}
