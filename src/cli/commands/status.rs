use anyhow::Result;
use colored::Colorize;
use modtailor::{FileStateStore, Layout, StateStore, TailoringState};

pub fn handle(layout: &Layout) -> Result<()> {
    let store = FileStateStore::new(&layout.state_file);
    let state = store.read()?;

    let marker = match state {
        TailoringState::NotTailored => "•".bright_cyan(),
        TailoringState::TailoredFor(_) => "✓".bright_green(),
        TailoringState::Undefined => "⚠".bright_yellow(),
    };

    println!("{} Module is {}", marker, state);
    println!("  {} {}", "state file:".bright_black(), store.path().display());

    Ok(())
}
