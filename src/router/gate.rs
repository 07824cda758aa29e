//! The `SKIP_UPKEEP` / `SKIP_TASKS` gate.

use std::path::{Path, PathBuf};

use crate::config::SkipFlags;
use crate::error::{Result, UpkeepError};

/// Fail with [`UpkeepError::ScriptNotFound`] unless `path` is a file.
pub fn require(name: &str, path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(UpkeepError::ScriptNotFound {
            name: name.to_string(),
            searched: vec![path.to_path_buf()],
        })
    }
}

/// Let a gated command through.
///
/// Existence is checked before the flags, so a missing script is an error
/// even while upkeep is skipped. Returns `None` when the gate is closed.
pub fn gate(name: &str, path: &Path, flags: &SkipFlags) -> Result<Option<PathBuf>> {
    let path = require(name, path)?;
    if flags.allows_upkeep() {
        Ok(Some(path))
    } else {
        tracing::debug!("Gate closed for '{}' (SKIP_UPKEEP set)", name);
        Ok(None)
    }
}
