pub mod status;
pub mod tailor;

use colored::Colorize;
use modtailor::config::DEPENDENCY_NAME;
use modtailor::TailorError;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} Caused by: {}", "├".bright_black(), cause);
    }

    match err.downcast_ref::<TailorError>() {
        Some(TailorError::Access { path, .. }) => {
            eprintln!("  {} Check that {} exists and is readable and writable", "└".bright_cyan(), path.display());
        }
        Some(TailorError::InconsistentState { .. }) => {
            eprintln!("  {} The state file was modified outside this tool", "└".bright_cyan());
            eprintln!("    Reinstall the package to restore it");
        }
        Some(TailorError::UndefinedState) | Some(TailorError::Deletion { .. }) => {
            eprintln!("  {} Files may already be missing from {}", "└".bright_cyan(), DEPENDENCY_NAME);
            eprintln!("    Run: {}", "npm install".bright_cyan());
        }
        Some(TailorError::Conflict { requested, .. }) => {
            eprintln!("  {} Reinstall the package to tailor it for {}", "└".bright_cyan(), requested);
        }
        Some(TailorError::NotFound { .. }) => {
            eprintln!("  {} Ensure {} is installed", "└".bright_cyan(), DEPENDENCY_NAME);
        }
        Some(TailorError::NoEnvironmentSelected) => {
            eprintln!(
                "  {} Pass {} or {}",
                "└".bright_cyan(),
                "--lambda-node4".bright_cyan(),
                "--lambda-node6".bright_cyan()
            );
        }
        _ => {
            eprintln!("  {} Run with {} for more details",
                "└".bright_black(),
                "--verbose".bright_cyan()
            );
        }
    }
}
