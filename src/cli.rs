//! CLI entry for routepatch, defining clap subcommands and dispatching each command handler.

use clap::{Parser, Subcommand};

use crate::command;
use crate::errors::PatchError;

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(
    about = "Routepatch: one-shot source patcher for the DSP settings form handler",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The Commands enum represents the subcommands that can be used with the CLI.
/// Subcommand args and handlers are defined in the `command` module.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Apply the DSP settings route patch to the target file")]
    Apply(command::apply::ApplyArgs),
    #[command(about = "Report whether the target file still needs the patch")]
    Check(command::check::CheckArgs),
    #[command(about = "List the patches this tool can apply")]
    List,
}

/// Parses the command-line arguments and executes the corresponding handler.
/// - `args`: parse from the command line if it's `None`, otherwise parse from the given args
pub fn parse(args: Option<&[&str]>) -> Result<(), PatchError> {
    let cli = match args {
        Some(args) => {
            Cli::try_parse_from(args).map_err(|e| PatchError::InvalidArgument(e.to_string()))?
        }
        None => Cli::parse(),
    };
    match cli.command {
        Commands::Apply(args) => command::apply::execute(args),
        Commands::Check(args) => command::check::execute(args),
        Commands::List => {
            command::list::execute();
            Ok(())
        }
    }
}

/// this test is to verify that the CLI can be built without panicking
/// according [clap dock](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_4/index.html)
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}
