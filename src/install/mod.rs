//! Component installation.
//!
//! The installer resolves where a component goes inside the project, copies
//! the bundled template there, and builds the example-usage snippet shown
//! after an agent is added.

mod usage;


use usage::example_usage;

use crate::catalog::TemplateCatalog;
use crate::component::{ComponentDescriptor, ComponentType, validate_name};
use crate::config::Config;
use crate::error::{AgentscapeError, Result};
use crate::fs::{copy_file, ensure_dir};
use crate::prompt::Prompter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory names components are installed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// Relative to the project root.
    pub agents_dir: String,
    /// Relative to the agents directory.
    pub tools_dir: String,
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for InstallLayout {
    fn from(config: &Config) -> Self {
        Self {
            agents_dir: config.agents_dir.clone(),
            tools_dir: config.tools_dir.clone(),
        }
    }
}

/// Result of a successful install.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub descriptor: ComponentDescriptor,
    /// Whether an existing file was replaced.
    pub overwritten: bool,
    /// Example snippet, for component kinds that have one.
    pub usage: Option<String>,
}

/// Installs templates from a catalog into one project.
#[derive(Debug, Clone)]
pub struct Installer {
    project_root: PathBuf,
    catalog: TemplateCatalog,
    layout: InstallLayout,
}

impl Installer {
    pub fn new(
        project_root: impl Into<PathBuf>,
        catalog: TemplateCatalog,
        layout: InstallLayout,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            catalog,
            layout,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Default install directory for `kind` without touching the filesystem.
    pub fn component_path(&self, kind: ComponentType) -> PathBuf {
        let agents = self.project_root.join(&self.layout.agents_dir);
        match kind {
            ComponentType::Agents => agents,
            ComponentType::Tools => agents.join(&self.layout.tools_dir),
        }
    }

    /// Default install directory for `kind`, created along with its parents.
    ///
    /// `<root>/agents` for agents, `<root>/agents/tools` for tools.
    pub fn component_dir(&self, kind: ComponentType) -> Result<PathBuf> {
        let dir = self.component_path(kind);
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Names of the templates available for `kind`, sorted.
    pub fn list_available(&self, kind: ComponentType) -> Result<Vec<String>> {
        self.catalog.list(kind)
    }

    /// Copy template `name` of `kind` into the project.
    ///
    /// The template is looked up before anything is created or prompted, so
    /// an unknown name leaves the filesystem untouched. An existing target is
    /// only replaced after `prompter` confirms.
    pub fn install(
        &self,
        name: &str,
        kind: ComponentType,
        destination: Option<&Path>,
        prompter: &mut dyn Prompter,
    ) -> Result<InstallReport> {
        validate_name(name)?;
        let source_path = self.catalog.source_path(kind, name)?;

        let target_dir = match destination {
            Some(dir) => {
                let dir = std::path::absolute(dir)
                    .map_err(|e| AgentscapeError::fs("failed to resolve destination", dir, e))?;
                ensure_dir(&dir)?;
                dir
            }
            None => self.component_dir(kind)?,
        };
        let destination_path = target_dir.join(self.catalog.file_name(name));
        debug!(
            source = %source_path.display(),
            dest = %destination_path.display(),
            "resolved install paths"
        );

        let overwritten = destination_path.exists();
        if overwritten {
            let question = format!(
                "{} {} already exists. Overwrite?",
                kind.singular_title(),
                name
            );
            if !prompter.confirm(&question, false)? {
                info!(dest = %destination_path.display(), "overwrite declined");
                return Err(AgentscapeError::Cancelled("Operation cancelled".to_string()));
            }
        }

        let bytes_written = copy_file(&source_path, &destination_path)?;
        info!(
            kind = %kind,
            component = name,
            dest = %destination_path.display(),
            bytes = bytes_written,
            overwritten,
            "installed component"
        );

        let usage = kind
            .shows_usage()
            .then(|| example_usage(&destination_path, &self.project_root, name));

        Ok(InstallReport {
            descriptor: ComponentDescriptor {
                name: name.to_string(),
                kind,
                source_path,
                destination_path,
            },
            overwritten,
            usage,
        })
    }
}
