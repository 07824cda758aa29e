//! Repair of the `environ.sh` symlink.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, UpkeepError};

use super::layout::Layout;

/// What [`ensure_environ_link`] found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// The link already pointed at the expected source; nothing was touched.
    Current,
    /// The link was missing or stale and has been recreated.
    Repaired { previous: Option<PathBuf> },
}

/// Point `<root>/environ.sh` at the expected source, leaving it untouched
/// when it is already correct.
///
/// Concurrent invocations are not serialized. A stale link that another
/// process already removed is fine, and so is one it recreated pointing at
/// the expected source.
pub fn ensure_environ_link(layout: &Layout) -> Result<LinkStatus> {
    let link = layout.environ_link();
    let target = layout.environ_source();

    let previous = fs::read_link(&link).ok();
    if previous.as_deref() == Some(target.as_path()) {
        tracing::debug!("{} already points at {}", link.display(), target.display());
        return Ok(LinkStatus::Current);
    }

    let link_err = |source: io::Error| UpkeepError::EnvironLink {
        link: link.clone(),
        target: target.clone(),
        source,
    };

    if fs::symlink_metadata(&link).is_ok() {
        remove_entry(&link).map_err(link_err)?;
    }

    match create_symlink(&target, &link) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if fs::read_link(&link).ok().as_deref() != Some(target.as_path()) {
                return Err(link_err(e));
            }
        }
        Err(e) => return Err(link_err(e)),
    }

    tracing::info!("Linked {} -> {}", link.display(), target.display());
    Ok(LinkStatus::Repaired { previous })
}

/// Remove `path`, treating an entry that is already gone as removed.
fn remove_entry(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} vanished before removal", path.display());
            Ok(())
        }
        other => other,
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
