pub mod config;
pub mod engine;
pub mod environment;
pub mod error;
pub mod locate;
pub mod scan;
pub mod state;

pub use config::{Layout, Options};
pub use engine::{decide, Decision, Outcome, Tailor};
pub use environment::Environment;
pub use error::{TailorError, TailorResult};
pub use state::{FileStateStore, StateStore, TailoringState};
