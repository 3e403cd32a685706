//! Filesystem utilities for agentscape.
//!
//! Directory creation and template copying, with every failure mapped to
//! an `AgentscapeError::Filesystem` that names the offending path.

mod atomic;

pub use atomic::atomic_write;

use crate::error::{AgentscapeError, Result};
use std::fs;
use std::path::Path;
use tracing::trace;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    trace!(dir = %dir.display(), "ensuring directory");
    fs::create_dir_all(dir).map_err(|e| AgentscapeError::fs("failed to create directory", dir, e))
}

/// Copy the exact bytes of `source` to `target`, replacing it if present.
///
/// Returns the number of bytes written.
pub fn copy_file<S: AsRef<Path>, T: AsRef<Path>>(source: S, target: T) -> Result<u64> {
    let source = source.as_ref();
    let target = target.as_ref();

    let content =
        fs::read(source).map_err(|e| AgentscapeError::fs("failed to read template", source, e))?;
    atomic_write(target, &content)?;

    Ok(content.len() as u64)
}
