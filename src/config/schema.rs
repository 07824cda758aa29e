//! Settings schema for `upkeep.yml`.
//!
//! Every field is optional; a missing file and an empty file both yield
//! [`Settings::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Layout settings read from `<root>/upkeep.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Repository root, relative to the upkeep root.
    pub build_root: PathBuf,

    /// Third-party dependency root, relative to the build root.
    pub dependencies_root: PathBuf,

    /// Directory whose presence switches the environ source, relative to the build root.
    pub override_dir: PathBuf,

    /// Default environ source, relative to the upkeep root.
    pub environ_source: PathBuf,

    /// Directory holding registered tasks, relative to the upkeep root.
    pub tasks_dir: PathBuf,

    /// Directory holding scripts reachable through `run`, relative to the upkeep root.
    pub scripts_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            build_root: PathBuf::from("."),
            dependencies_root: PathBuf::from("dependencies"),
            override_dir: PathBuf::from("upkeep-overrides"),
            environ_source: PathBuf::from("config/environ.sh"),
            tasks_dir: PathBuf::from("tasks"),
            scripts_dir: PathBuf::from("scripts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_layout() {
        let settings = Settings::default();
        assert_eq!(settings.build_root, PathBuf::from("."));
        assert_eq!(settings.tasks_dir, PathBuf::from("tasks"));
        assert_eq!(settings.scripts_dir, PathBuf::from("scripts"));
        assert_eq!(settings.environ_source, PathBuf::from("config/environ.sh"));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let settings: Settings = serde_yaml::from_str("override_dir: ../private/upkeep").unwrap();
        assert_eq!(settings.override_dir, PathBuf::from("../private/upkeep"));
        assert_eq!(settings.dependencies_root, PathBuf::from("dependencies"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("task_dir: x");
        assert!(result.is_err());
    }
}
