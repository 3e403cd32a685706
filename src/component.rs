//! Component kinds and the per-install descriptor.

use crate::error::{AgentscapeError, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("component name pattern is valid")
});

/// The kind of component that can be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// An agent definition, installed under `<root>/agents`.
    #[value(alias = "agent")]
    Agents,
    /// A tool used by agents, installed under `<root>/agents/tools`.
    #[value(alias = "tool")]
    Tools,
}

impl ComponentType {
    pub const ALL: [ComponentType; 2] = [ComponentType::Agents, ComponentType::Tools];

    /// Subdirectory name of the bundled templates for this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            ComponentType::Agents => "agents",
            ComponentType::Tools => "tools",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ComponentType::Agents => "agent",
            ComponentType::Tools => "tool",
        }
    }

    pub fn singular_title(self) -> &'static str {
        match self {
            ComponentType::Agents => "Agent",
            ComponentType::Tools => "Tool",
        }
    }

    pub fn plural_title(self) -> &'static str {
        match self {
            ComponentType::Agents => "Agents",
            ComponentType::Tools => "Tools",
        }
    }

    /// Only agents get an example-usage snippet after install.
    pub fn shows_usage(self) -> bool {
        matches!(self, ComponentType::Agents)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ComponentType {
    type Err = AgentscapeError;

    fn from_str(s: &str) -> Result<Self> {
        <ComponentType as ValueEnum>::from_str(s, true).map_err(|_| {
            AgentscapeError::UserError(format!(
                "unknown component type '{}' (expected 'agents' or 'tools')",
                s
            ))
        })
    }
}

/// Everything known about a single `add` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub kind: ComponentType,
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
}

/// Reject names that are not usable as an import path segment.
///
/// This also keeps `../x` style names from escaping the destination directory.
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(AgentscapeError::UserError(format!(
            "invalid component name '{}': use letters, digits and underscores, not starting with a digit",
            name
        )))
    }
}
