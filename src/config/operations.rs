//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{AgentscapeError, Result};
use std::path::{Component, Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored. A relative
    /// `templates_dir` is resolved against the directory holding the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AgentscapeError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        if config.templates_dir.is_relative()
            && let Some(base) = path.parent()
        {
            config.templates_dir = base.join(&config.templates_dir);
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AgentscapeError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config from the CLI's global options.
    ///
    /// Precedence: defaults, then `config_path`, then `templates_override`.
    pub fn resolve(
        config_path: Option<&Path>,
        templates_override: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(dir) = templates_override {
            config.templates_dir = dir;
        }

        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `source_extension` must be non-empty and have no leading dot
    /// - `marker_file` must be a plain file name
    /// - `agents_dir` and `tools_dir` must be single path segments
    pub fn validate(&self) -> Result<()> {
        if self.source_extension.is_empty() {
            return Err(AgentscapeError::Config(
                "source_extension must be non-empty".to_string(),
            ));
        }
        if self.source_extension.starts_with('.') {
            return Err(AgentscapeError::Config(format!(
                "source_extension should not start with a dot: '{}'",
                self.source_extension
            )));
        }

        for (field, value) in [
            ("marker_file", &self.marker_file),
            ("agents_dir", &self.agents_dir),
            ("tools_dir", &self.tools_dir),
        ] {
            if !is_single_segment(value) {
                return Err(AgentscapeError::Config(format!(
                    "{} must be a single file or directory name, got '{}'",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

fn is_single_segment(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
