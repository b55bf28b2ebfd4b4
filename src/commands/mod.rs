//! Subcommand implementations.

pub mod modal;
pub mod patch;
pub mod snippet;

use std::path::PathBuf;

use ngsmith_core::prelude::*;

use crate::cli::{Cli, Command};
use crate::config;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let project = cli.project.unwrap_or_else(|| PathBuf::from("."));
    let settings = config::load_settings(&project);

    match cli.command {
        Command::Parse { setting } => snippet::parse(&setting),
        Command::Schema { setting } => snippet::schema(&setting),
        Command::Columns { setting } => snippet::columns(&setting, &settings),
        Command::Patch(command) => patch::run(command, &settings),
        Command::Modal(args) => modal::run(args, &settings),
        Command::Init => {
            config::init_config_dir(&project)?;
            eprintln!("created: {}", project.join(".ngsmith/config.toml").display());
            Ok(())
        }
    }
}
