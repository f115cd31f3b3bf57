//! Subcommand implementations. Each module defines its clap args struct and
//! an `execute` entry point dispatched from `cli`.

pub mod apply;
pub mod check;
pub mod list;
