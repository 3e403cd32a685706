//! Error types for the agentscape CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::component::ComponentType;
use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for agentscape operations.
#[derive(Error, Debug)]
pub enum AgentscapeError {
    /// No bundled template matches the requested name.
    #[error(
        "{} template '{name}' not found in {} (run `agentscape list {}` to see available templates)",
        .kind.singular_title(),
        .dir.display(),
        .kind.dir_name()
    )]
    TemplateNotFound {
        kind: ComponentType,
        name: String,
        dir: PathBuf,
    },

    /// The user declined a prompt; not a failure of the tool.
    #[error("{0}")]
    Cancelled(String),

    /// Creating a directory or writing a file failed.
    #[error("{action} '{}': {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the terminal failed.
    #[error("{action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Invalid arguments or input.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be read or is invalid.
    #[error("config: {0}")]
    Config(String),
}

impl AgentscapeError {
    /// Build a filesystem error for `path`.
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AgentscapeError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Build a terminal I/O error.
    pub fn io(action: &'static str, source: std::io::Error) -> Self {
        AgentscapeError::Io { action, source }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AgentscapeError::Cancelled(_) => exit_codes::CANCELLED,
            AgentscapeError::TemplateNotFound { .. }
            | AgentscapeError::Filesystem { .. }
            | AgentscapeError::Io { .. }
            | AgentscapeError::UserError(_)
            | AgentscapeError::Config(_) => exit_codes::ERROR,
        }
    }

    /// Whether this error is a user cancellation rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AgentscapeError::Cancelled(_))
    }
}

/// Result type alias for agentscape operations.
pub type Result<T> = std::result::Result<T, AgentscapeError>;
