//! CLI argument parsing for agentscape.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::component::ComponentType;
use crate::error::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Agentscape: install AI agent and tool templates into your project.
///
/// Templates are copied into `<project>/agents` (agents) or
/// `<project>/agents/tools` (tools). Run without a command to pick a
/// component interactively.
#[derive(Parser, Debug)]
#[command(name = "agentscape")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options accepted by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Read settings from this YAML file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use templates from this directory instead of the bundled ones.
    #[arg(long, global = true, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands for agentscape.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an agent or tool to your project.
    ///
    /// `add <name>` installs an agent; `add tools <name>` installs a tool.
    Add(AddArgs),

    /// List available agents or tools.
    List(ListArgs),
}

/// Arguments for the `add` command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Component type (agents or tools), or the name when the type is omitted.
    #[arg(value_name = "TYPE")]
    pub first: String,

    /// Name of the component to add.
    #[arg(value_name = "NAME")]
    pub second: Option<String>,

    /// Custom destination directory.
    #[arg(short = 'd', long = "dest", value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Overwrite an existing component without asking.
    #[arg(short, long)]
    pub yes: bool,
}

impl AddArgs {
    /// The component type and name, with the type defaulting to agents.
    pub fn target(&self) -> Result<(ComponentType, &str)> {
        match &self.second {
            Some(name) => Ok((self.first.parse()?, name.as_str())),
            None => Ok((ComponentType::Agents, self.first.as_str())),
        }
    }
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Component type to list.
    #[arg(value_enum, ignore_case = true, default_value_t = ComponentType::Agents)]
    pub kind: ComponentType,

    /// Print the names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
