//! Upkeep root and directory layout.
//!
//! The root is the directory holding the router itself, unless overridden
//! with `--root` / `UPKEEP_ROOT`. Every other path is derived from it and
//! the optional `upkeep.yml` settings.

use std::path::{Component, Path, PathBuf};

use crate::config::{load_settings, Settings};
use crate::error::{Result, UpkeepError};

/// Exported: repository root.
pub const BUILD_ROOT: &str = "BUILD_ROOT";

/// Exported: root of the upkeep task namespace.
pub const UPKEEP_ROOT: &str = "UPKEEP_ROOT";

/// Exported: third-party dependency root.
pub const DEPENDENCIES_ROOT: &str = "DEPENDENCIES_ROOT";

/// Name of the managed symlink inside the root.
pub const ENVIRON_LINK: &str = "environ.sh";

/// The check action script.
pub const CHECK_SCRIPT: &str = "check.sh";

/// The force action script.
pub const FORCE_SCRIPT: &str = "force.sh";

/// The task executor script.
pub const TASK_EXECUTOR: &str = "execute_task.sh";

/// How the root was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `--root` flag or `UPKEEP_ROOT`.
    Explicit,
    /// Directory of the running executable.
    Executable,
}

impl std::fmt::Display for RootSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "--root/UPKEEP_ROOT"),
            Self::Executable => write!(f, "executable location"),
        }
    }
}

/// Resolved absolute paths for one upkeep root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    build_root: PathBuf,
    dependencies_root: PathBuf,
    override_dir: PathBuf,
    default_environ: PathBuf,
    tasks_dir: PathBuf,
    scripts_dir: PathBuf,
}

impl Layout {
    /// Load `upkeep.yml` from `root` and resolve the layout.
    pub fn load(root: &Path) -> Result<Self> {
        let root = canonical_root(root)?;
        let settings = load_settings(&root)?;
        Ok(Self::with_settings(root, &settings))
    }

    /// Resolve the layout for an already canonical root.
    pub fn with_settings(root: PathBuf, settings: &Settings) -> Self {
        let build_root = normalize(&root.join(&settings.build_root));
        Self {
            dependencies_root: normalize(&build_root.join(&settings.dependencies_root)),
            override_dir: normalize(&build_root.join(&settings.override_dir)),
            default_environ: normalize(&root.join(&settings.environ_source)),
            tasks_dir: normalize(&root.join(&settings.tasks_dir)),
            scripts_dir: normalize(&root.join(&settings.scripts_dir)),
            build_root,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn dependencies_root(&self) -> &Path {
        &self.dependencies_root
    }

    pub fn override_dir(&self) -> &Path {
        &self.override_dir
    }

    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    pub fn check_script(&self) -> PathBuf {
        self.root.join(CHECK_SCRIPT)
    }

    pub fn force_script(&self) -> PathBuf {
        self.root.join(FORCE_SCRIPT)
    }

    pub fn task_executor(&self) -> PathBuf {
        self.root.join(TASK_EXECUTOR)
    }

    /// Location of the managed `environ.sh` symlink.
    pub fn environ_link(&self) -> PathBuf {
        self.root.join(ENVIRON_LINK)
    }

    /// The file `environ.sh` should point at.
    ///
    /// The override directory wins whenever it exists.
    pub fn environ_source(&self) -> PathBuf {
        if self.override_dir.is_dir() {
            self.override_dir.join(ENVIRON_LINK)
        } else {
            self.default_environ.clone()
        }
    }

    /// Variables exported to every delegated script.
    pub fn exported_vars(&self) -> Vec<(String, String)> {
        vec![
            (BUILD_ROOT.to_string(), self.build_root.display().to_string()),
            (UPKEEP_ROOT.to_string(), self.root.display().to_string()),
            (
                DEPENDENCIES_ROOT.to_string(),
                self.dependencies_root.display().to_string(),
            ),
        ]
    }
}

/// Pick the upkeep root: the explicit one if given, else the executable's directory.
pub fn resolve_root(explicit: Option<&Path>) -> Result<(PathBuf, RootSource)> {
    if let Some(path) = explicit {
        return Ok((path.to_path_buf(), RootSource::Explicit));
    }

    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("executable {} has no parent directory", exe.display()))?;
    Ok((dir, RootSource::Executable))
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(UpkeepError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    Ok(root.canonicalize()?)
}

/// Lexically collapse `.` and `..` so derived paths stay readable even when
/// they do not exist yet.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
