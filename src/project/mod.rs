//! Project root resolution.
//!
//! The project root anchors every path agentscape shows to the user: the
//! default install directories live under it and the example-usage import
//! path is computed relative to it.
//!
//! Resolution never fails. From the starting directory:
//! 1. Walk upward until a directory holding the marker file is found (or the
//!    filesystem root is reached). That directory is the *anchor*; without a
//!    marker the anchor is the starting directory.
//! 2. The nearest directory between the start and the anchor that directly
//!    contains a source file is the root. Without a marker every ancestor up
//!    to the filesystem root is considered.
//! 3. Otherwise the anchor's descendants are searched breadth-first, and the
//!    first directory directly containing a source file is the root.
//! 4. Otherwise the anchor itself is the root.

use crate::config::Config;
use crate::error::{AgentscapeError, Result};
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};


/// Directories never descended into while searching for source files.
const SKIPPED_DIRS: &[&str] = &[
    "venv",
    "env",
    "node_modules",
    "__pycache__",
    "site-packages",
    "target",
    "build",
    "dist",
];

/// How far below the anchor the descendant search goes.
const MAX_SEARCH_DEPTH: usize = 8;

/// What identifies a project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMarkers {
    /// File name whose presence marks the project root.
    pub marker_file: String,
    /// Extension (without dot) of the project's source files.
    pub source_extension: String,
}

impl Default for ProjectMarkers {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ProjectMarkers {
    fn from(config: &Config) -> Self {
        Self {
            marker_file: config.marker_file.clone(),
            source_extension: config.source_extension.clone(),
        }
    }
}

/// Finds the project root for an invocation.
#[derive(Debug, Clone, Default)]
pub struct ProjectLocator {
    markers: ProjectMarkers,
}

impl ProjectLocator {
    pub fn new(markers: ProjectMarkers) -> Self {
        Self { markers }
    }

    /// Resolve the project root from the current working directory.
    ///
    /// Only obtaining the working directory itself can fail.
    pub fn resolve(&self) -> Result<PathBuf> {
        let cwd = env::current_dir()
            .map_err(|e| AgentscapeError::fs("failed to get current directory", ".", e))?;
        Ok(self.resolve_from(cwd))
    }

    /// Resolve the project root starting from `start`.
    pub fn resolve_from<P: AsRef<Path>>(&self, start: P) -> PathBuf {
        let start = start.as_ref();

        let marker_dir = self.find_marker_dir(start);
        let anchor = marker_dir.as_deref().unwrap_or(start);
        debug!(
            start = %start.display(),
            anchor = %anchor.display(),
            marker_found = marker_dir.is_some(),
            "resolving project root"
        );

        // Without a marker the whole ancestor chain is searched.
        for dir in start.ancestors() {
            if self.contains_source_file(dir) {
                debug!(root = %dir.display(), "source file found in ancestor chain");
                return dir.to_path_buf();
            }
            if marker_dir.as_deref() == Some(dir) {
                break;
            }
        }

        if let Some(dir) = self.find_source_dir_below(anchor) {
            debug!(root = %dir.display(), "source file found below anchor");
            return dir;
        }

        debug!(root = %anchor.display(), "no source files found, using anchor");
        anchor.to_path_buf()
    }

    /// Nearest ancestor of `start` (inclusive) holding the marker file.
    fn find_marker_dir(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(&self.markers.marker_file).exists())
            .map(Path::to_path_buf)
    }

    /// Breadth-first search for the shallowest directory holding a source file.
    fn find_source_dir_below(&self, anchor: &Path) -> Option<PathBuf> {
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::new();
        queue.extend(sorted_subdirs(anchor).into_iter().map(|d| (d, 1)));

        while let Some((dir, depth)) = queue.pop_front() {
            if self.contains_source_file(&dir) {
                return Some(dir);
            }
            if depth < MAX_SEARCH_DEPTH {
                queue.extend(sorted_subdirs(&dir).into_iter().map(|d| (d, depth + 1)));
            }
        }

        None
    }

    /// Whether `dir` directly contains a file with the source extension.
    fn contains_source_file(&self, dir: &Path) -> bool {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return false;
            }
        };

        entries.flatten().any(|entry| {
            let path = entry.path();
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == self.markers.source_extension.as_str())
        })
    }
}

/// Child directories of `dir` worth searching, sorted by name.
fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            trace!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            !name.starts_with('.') && !SKIPPED_DIRS.contains(&name.as_ref())
        })
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    dirs
}
