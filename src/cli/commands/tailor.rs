use anyhow::Result;
use colored::Colorize;
use modtailor::{Layout, Options, Outcome, Tailor};

pub fn handle(layout: &Layout, options: &Options) -> Result<()> {
    let prefix = if options.dry_run { "[dry run] " } else { "" };
    let target = options
        .environment
        .map(|env| env.name())
        .unwrap_or("no environment");

    let outcome = match Tailor::for_layout(layout).run(options) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("{}{} Tailoring for {} failed", prefix, "✗".bright_red(), target);
            return Err(err.into());
        }
    };

    match outcome {
        Outcome::AlreadyTailored(env) => {
            println!(
                "{}{} Module is already tailored for {} ({})",
                prefix,
                "✓".bright_green(),
                env.to_string().bright_yellow(),
                env.description()
            );
        }
        Outcome::DryRun { environment, candidates } => {
            if candidates.is_empty() {
                println!("{}{} Nothing to delete", prefix, "ℹ".bright_blue());
            } else {
                println!("{}Would delete {} files:", prefix, candidates.len());
                for candidate in &candidates {
                    println!("  {} {}", "•".bright_cyan(), candidate.display());
                }
            }
            println!(
                "{}{} Tailoring for {} succeeded",
                prefix,
                "✓".bright_green(),
                environment.to_string().bright_yellow()
            );
        }
        Outcome::Tailored { environment, deleted } => {
            println!("Deleted {} files", deleted.len());
            println!(
                "{} Tailoring for {} succeeded",
                "✓".bright_green(),
                environment.to_string().bright_yellow()
            );
        }
    }

    Ok(())
}
