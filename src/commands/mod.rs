//! CLI commands.
//!
//! Each subcommand is an argument struct with an `execute` method, so the
//! binary only parses, dispatches and prints.

use clap::Subcommand;

mod init_config;
mod layout;

pub use init_config::{InitConfigCommand, InitConfigResult};
pub use layout::LayoutCommand;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lay out the grid for a project
    Layout(LayoutCommand),
    /// Write the default configuration file
    InitConfig(InitConfigCommand),
}
