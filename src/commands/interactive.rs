//! The interactive flow run when no subcommand is given.
//!
//! Asks for a component type, then a component, then installs it exactly
//! like `agentscape add`.

use super::add::add_component;
use super::{emit, installer_for};
use crate::component::ComponentType;
use crate::config::Config;
use crate::error::Result;
use crate::install::Installer;
use crate::prompt::{Prompter, TerminalPrompter};
use colored::Colorize;
use std::io::{self, Write};

/// Execute the interactive install flow on the terminal.
pub fn cmd_interactive(config: &Config) -> Result<()> {
    let installer = installer_for(config)?;
    let mut prompter = TerminalPrompter::stdio();
    run_interactive(&installer, &mut prompter, &mut io::stdout())
}

/// An unanswered selection ends the flow without error.
pub(super) fn run_interactive(
    installer: &Installer,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    let kinds: Vec<String> = ComponentType::ALL
        .iter()
        .map(|kind| kind.dir_name().to_string())
        .collect();

    let Some(choice) = prompter.select("What would you like to install?", &kinds)? else {
        return emit(out, &"Operation cancelled".yellow().to_string());
    };
    let kind: ComponentType = choice.parse()?;

    let available = installer.list_available(kind)?;
    if available.is_empty() {
        return emit(out, &format!("No available {}", kind).yellow().to_string());
    }

    let question = format!("Which {} would you like to install?", kind.singular());
    let Some(name) = prompter.select(&question, &available)? else {
        return emit(out, &"Operation cancelled".yellow().to_string());
    };

    add_component(installer, kind, &name, None, prompter, out)
}
