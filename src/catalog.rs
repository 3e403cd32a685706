//! The bundled template catalog.
//!
//! Templates live in `<templates_dir>/<kind>/<name>.<ext>`. Names starting
//! with an underscore are private helpers and never offered to the user.

use crate::component::ComponentType;
use crate::error::{AgentscapeError, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Read-only view over a template directory.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    extension: String,
}

impl TemplateCatalog {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Whether the template directory itself is present.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Directory holding templates of `kind`.
    pub fn dir_for(&self, kind: ComponentType) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// File name a component called `name` is stored under.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension)
    }

    /// Public template names of `kind`, sorted ascending.
    ///
    /// A missing or unreadable directory yields an empty list.
    pub fn list(&self, kind: ComponentType) -> Result<Vec<String>> {
        let dir = self.dir_for(kind);
        let matcher = self.matcher()?;

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "template directory not readable");
                return Ok(Vec::new());
            }
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter(|entry| matcher.is_match(entry.file_name()))
            .filter_map(|entry| {
                let path = entry.path();
                let stem = path.file_stem()?.to_str()?.to_string();
                (!stem.starts_with('_')).then_some(stem)
            })
            .collect();
        names.sort();

        debug!(kind = %kind, count = names.len(), "listed templates");
        Ok(names)
    }

    /// Path of the template `name` of `kind`, which must exist.
    pub fn source_path(&self, kind: ComponentType, name: &str) -> Result<PathBuf> {
        let dir = self.dir_for(kind);
        let path = dir.join(self.file_name(name));

        if path.is_file() {
            Ok(path)
        } else {
            Err(AgentscapeError::TemplateNotFound {
                kind,
                name: name.to_string(),
                dir,
            })
        }
    }

    fn matcher(&self) -> Result<GlobMatcher> {
        let pattern = format!("*.{}", self.extension);
        Glob::new(&pattern)
            .map(|glob| glob.compile_matcher())
            .map_err(|e| {
                AgentscapeError::Config(format!("invalid template pattern '{}': {}", pattern, e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::touch;
    use tempfile::TempDir;

    fn catalog(dir: &TempDir) -> TemplateCatalog {
        TemplateCatalog::new(dir.path(), "py")
    }

    #[test]
    fn test_list_skips_private_templates_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let agents = temp_dir.path().join("agents");
        touch(&agents.join("zeta_agent.py"));
        touch(&agents.join("_hidden.py"));
        touch(&agents.join("alpha_agent.py"));

        let names = catalog(&temp_dir).list(ComponentType::Agents).unwrap();

        assert_eq!(names, vec!["alpha_agent", "zeta_agent"]);
    }

    #[test]
    fn test_list_only_matches_extension_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let tools = temp_dir.path().join("tools");
        touch(&tools.join("get_weather.py"));
        touch(&tools.join("README.md"));
        touch(&tools.join("cache.pyc"));
        std::fs::create_dir_all(tools.join("package.py")).unwrap();

        let names = catalog(&temp_dir).list(ComponentType::Tools).unwrap();

        assert_eq!(names, vec!["get_weather"]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let names = catalog(&temp_dir).list(ComponentType::Tools).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_list_is_per_kind() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("agents").join("a.py"));
        touch(&temp_dir.path().join("tools").join("t.py"));

        let catalog = catalog(&temp_dir);
        assert_eq!(catalog.list(ComponentType::Agents).unwrap(), vec!["a"]);
        assert_eq!(catalog.list(ComponentType::Tools).unwrap(), vec!["t"]);
    }

    #[test]
    fn test_exists_reflects_root_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(catalog(&temp_dir).exists());
        assert!(!TemplateCatalog::new(temp_dir.path().join("moved"), "py").exists());
    }

    #[test]
    fn test_source_path_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("agents").join("weather_agent.py");
        touch(&path);

        let found = catalog(&temp_dir)
            .source_path(ComponentType::Agents, "weather_agent")
            .unwrap();
        assert_eq!(found, path);
    }

    #[test]
    fn test_source_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = catalog(&temp_dir)
            .source_path(ComponentType::Tools, "nope")
            .unwrap_err();

        match err {
            AgentscapeError::TemplateNotFound { kind, name, dir } => {
                assert_eq!(kind, ComponentType::Tools);
                assert_eq!(name, "nope");
                assert_eq!(dir, temp_dir.path().join("tools"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("agents").join("bot.ts"));
        touch(&temp_dir.path().join("agents").join("other.py"));

        let catalog = TemplateCatalog::new(temp_dir.path(), "ts");
        assert_eq!(catalog.list(ComponentType::Agents).unwrap(), vec!["bot"]);
        assert_eq!(catalog.file_name("bot"), "bot.ts");
    }

    #[test]
    fn test_bundled_templates_are_listed() {
        let catalog = TemplateCatalog::new(crate::config::bundled_templates_dir(), "py");
        let agents = catalog.list(ComponentType::Agents).unwrap();
        let tools = catalog.list(ComponentType::Tools).unwrap();

        assert!(agents.contains(&"weather_agent".to_string()));
        assert!(tools.contains(&"get_weather".to_string()));
        assert!(agents.iter().all(|name| !name.starts_with('_')));
    }
}
