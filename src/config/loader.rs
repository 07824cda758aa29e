//! Settings file discovery and loading.

use crate::config::schema::Settings;
use crate::error::{Result, UpkeepError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional settings file inside the upkeep root.
pub const SETTINGS_FILE: &str = "upkeep.yml";

/// Path of the settings file for the given root.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

/// Parse settings from a YAML string.
///
/// Blank documents yield the defaults.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| UpkeepError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load `upkeep.yml` from the root, falling back to defaults when absent.
pub fn load_settings(root: &Path) -> Result<Settings> {
    let path = settings_path(root);
    if !path.is_file() {
        tracing::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_settings(&content, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "\n# nothing here\n").unwrap();
        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn loads_overrides_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            settings_path(temp.path()),
            "build_root: ../..\ntasks_dir: jobs\n",
        )
        .unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.build_root, PathBuf::from("../.."));
        assert_eq!(settings.tasks_dir, PathBuf::from("jobs"));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        fs::write(settings_path(temp.path()), "build_root: [unclosed").unwrap();

        let err = load_settings(temp.path()).unwrap_err();
        match err {
            UpkeepError::ConfigParseError { path, .. } => {
                assert!(path.ends_with(SETTINGS_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
