mod cli;

use anyhow::Result;
use cli::{commands, Invocation};
use modtailor::Layout;

fn main() {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    // Setup tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    let layout = match &cli.package_dir {
        Some(dir) => Layout::new(dir),
        None => Layout::from_executable()?,
    };

    match cli.invocation() {
        Invocation::Status => commands::status::handle(&layout),
        Invocation::Tailor(options) => commands::tailor::handle(&layout, &options),
    }
}
