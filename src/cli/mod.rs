pub mod commands;

use clap::Parser;
use modtailor::{Environment, Options};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modtailor")]
#[command(about = "Delete prebuilt native binaries a Lambda runtime does not need", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    #[arg(long = "lambda-node4", overrides_with = "lambda_node6", help = "Tailor for AWS Lambda, Node.js 4.3 (ABI 46)")]
    pub lambda_node4: bool,

    #[arg(long = "lambda-node6", overrides_with = "lambda_node4", help = "Tailor for AWS Lambda, Node.js 6.10 (ABI 48)")]
    pub lambda_node6: bool,

    #[arg(short = 'n', long, help = "List the files that would be deleted without deleting them")]
    pub dry_run: bool,

    #[arg(short, long, help = "Print the current tailoring state and exit")]
    pub status: bool,

    #[arg(long, value_name = "DIR", help = "Package directory (defaults to the executable's directory)")]
    pub package_dir: Option<PathBuf>,

    #[arg(short, long, help = "Show debug logging")]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Status,
    Tailor(Options),
}

impl Cli {
    pub fn environment(&self) -> Option<Environment> {
        if self.lambda_node4 {
            Some(Environment::LambdaNode4)
        } else if self.lambda_node6 {
            Some(Environment::LambdaNode6)
        } else {
            None
        }
    }

    pub fn invocation(&self) -> Invocation {
        if self.status {
            return Invocation::Status;
        }

        Invocation::Tailor(Options {
            environment: self.environment(),
            dry_run: self.dry_run,
        })
    }
}

/// Parses arguments without exiting the process; help, version and usage
/// errors come back as `clap::Error`.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
