//! Upkeep environment: root layout, exported variables and `environ.sh`.
//!
//! - [`layout`] resolves the root and every path derived from it
//! - [`link`] keeps the `environ.sh` symlink pointing at the right source
//! - [`environ_file`] reads the variables that source defines

pub mod environ_file;
pub mod layout;
pub mod link;

pub use environ_file::EnvironFile;
pub use layout::{
    resolve_root, Layout, RootSource, BUILD_ROOT, CHECK_SCRIPT, DEPENDENCIES_ROOT, ENVIRON_LINK,
    FORCE_SCRIPT, TASK_EXECUTOR, UPKEEP_ROOT,
};
pub use link::{ensure_environ_link, LinkStatus};
