//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. A reader never observes a half-copied
//! component; a crash can at worst leave the temp file behind.

use crate::error::{AgentscapeError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating its parent directory.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| AgentscapeError::fs("failed to create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    if let Err(err) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    // std's rename replaces an existing target on every supported platform.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AgentscapeError::fs("failed to write", path, e)
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AgentscapeError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| AgentscapeError::fs("failed to create", path, e))?;
    file.write_all(content)
        .map_err(|e| AgentscapeError::fs("failed to write", path, e))?;
    file.sync_all()
        .map_err(|e| AgentscapeError::fs("failed to sync", path, e))
}
