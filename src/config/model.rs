//! Config struct definition and default implementation.

use serde::Deserialize;
use std::path::PathBuf;

/// Location of the templates shipped with the crate.
pub fn bundled_templates_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

/// Configuration for agentscape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Templates
    // =========================================================================
    /// Directory holding `agents/` and `tools/` template subdirectories.
    #[serde(default = "bundled_templates_dir")]
    pub templates_dir: PathBuf,

    /// Extension (without leading dot) of template and source files.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    // =========================================================================
    // Project detection
    // =========================================================================
    /// File whose presence marks a project root.
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    // =========================================================================
    // Install layout
    // =========================================================================
    /// Directory under the project root that receives agents.
    #[serde(default = "default_agents_dir")]
    pub agents_dir: String,

    /// Directory under the agents directory that receives tools.
    #[serde(default = "default_tools_dir")]
    pub tools_dir: String,
}

pub(super) fn default_source_extension() -> String {
    "py".to_string()
}

pub(super) fn default_marker_file() -> String {
    "pyproject.toml".to_string()
}

pub(super) fn default_agents_dir() -> String {
    "agents".to_string()
}

pub(super) fn default_tools_dir() -> String {
    "tools".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: bundled_templates_dir(),
            source_extension: default_source_extension(),
            marker_file: default_marker_file(),
            agents_dir: default_agents_dir(),
            tools_dir: default_tools_dir(),
        }
    }
}
