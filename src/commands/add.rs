//! Implementation of the `agentscape add` command.
//!
//! Copies a bundled template into the project and shows how to use it.

use super::display::{added_line, panel};
use super::{emit, installer_for};
use crate::cli::AddArgs;
use crate::component::ComponentType;
use crate::config::Config;
use crate::error::Result;
use crate::install::Installer;
use crate::prompt::{AssumeYes, Prompter, TerminalPrompter};
use colored::Color;
use std::env;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Execute the `agentscape add` command.
pub fn cmd_add(config: &Config, args: AddArgs) -> Result<()> {
    let (kind, name) = args.target()?;
    let installer = installer_for(config)?;
    let destination = args.destination.as_deref();
    let mut out = io::stdout();

    if args.yes {
        add_component(&installer, kind, name, destination, &mut AssumeYes, &mut out)
    } else {
        let mut prompter = TerminalPrompter::stdio();
        add_component(&installer, kind, name, destination, &mut prompter, &mut out)
    }
}

/// Install one component and report it on `out`.
pub(super) fn add_component(
    installer: &Installer,
    kind: ComponentType,
    name: &str,
    destination: Option<&Path>,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    let report = installer.install(name, kind, destination, prompter)?;
    debug!(
        source = %report.descriptor.source_path.display(),
        "copied template"
    );

    let cwd = env::current_dir().unwrap_or_else(|_| installer.project_root().to_path_buf());
    emit(out, &added_line(&report, &cwd))?;

    if let Some(usage) = &report.usage {
        emit(out, &panel("Example usage", usage, Color::White))?;
    }

    Ok(())
}
