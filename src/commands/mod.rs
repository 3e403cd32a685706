//! Command implementations for agentscape.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the wiring from `Config` to the catalog, locator
//! and installer each command works with.

mod add;
mod display;
mod interactive;
mod list;


use crate::catalog::TemplateCatalog;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{AgentscapeError, Result};
use crate::install::{InstallLayout, Installer};
use crate::project::{ProjectLocator, ProjectMarkers};
use std::io::Write;
use tracing::{debug, warn};

/// Dispatch a command to its implementation.
///
/// With no subcommand the interactive install flow runs.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.global.config.as_deref(), cli.global.templates.clone())?;
    debug!(templates = %config.templates_dir.display(), "configuration resolved");

    match cli.command {
        Some(Command::Add(args)) => add::cmd_add(&config, args),
        Some(Command::List(args)) => list::cmd_list(&config, args),
        None => interactive::cmd_interactive(&config),
    }
}

/// Template catalog for `config`, warning when its directory is gone.
///
/// The default directory is fixed at build time, so a relocated binary
/// otherwise just reports that nothing is available.
fn catalog_for(config: &Config) -> TemplateCatalog {
    let catalog = TemplateCatalog::new(&config.templates_dir, &config.source_extension);
    if !catalog.exists() {
        warn!(
            dir = %config.templates_dir.display(),
            "template directory not found; pass --templates <DIR> or set templates_dir in --config"
        );
    }
    catalog
}

/// Locate the project from the working directory and build its installer.
fn installer_for(config: &Config) -> Result<Installer> {
    let root = ProjectLocator::new(ProjectMarkers::from(config)).resolve()?;
    debug!(root = %root.display(), "project root resolved");
    Ok(Installer::new(
        root,
        catalog_for(config),
        InstallLayout::from(config),
    ))
}

/// Write a block of user-facing output followed by a newline.
fn emit(out: &mut dyn Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text).map_err(|e| AgentscapeError::io("failed to write output", e))
}
