//! Lookup of the script named by `run`.

use std::path::{Path, PathBuf};

use crate::environment::Layout;
use crate::error::{Result, UpkeepError};

/// Candidate paths for `name`, in lookup order.
///
/// 1. `name` as a literal path (absolute, or relative to the root)
/// 2. `<scripts_dir>/<name>`
/// 3. `<scripts_dir>/<name>.sh`
/// 4. `<tasks_dir>/<name>.sh`
pub fn candidates(name: &str, layout: &Layout) -> Vec<PathBuf> {
    let literal = Path::new(name);
    let literal = if literal.is_absolute() {
        literal.to_path_buf()
    } else {
        layout.root().join(literal)
    };

    let with_ext = format!("{name}.sh");
    vec![
        literal,
        layout.scripts_dir().join(name),
        layout.scripts_dir().join(&with_ext),
        layout.tasks_dir().join(&with_ext),
    ]
}

/// Resolve `name` to an existing script.
pub fn find_script(name: &str, layout: &Layout) -> Result<PathBuf> {
    let searched = candidates(name, layout);
    match searched.iter().find(|p| p.is_file()) {
        Some(found) => {
            tracing::debug!("Resolved '{}' to {}", name, found.display());
            Ok(found.clone())
        }
        None => Err(UpkeepError::ScriptNotFound {
            name: name.to_string(),
            searched,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Layout) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        fs::create_dir_all(temp.path().join("tasks")).unwrap();
        let layout = Layout::load(temp.path()).unwrap();
        (temp, layout)
    }

    #[test]
    fn finds_literal_path_relative_to_root() {
        let (_temp, layout) = setup();
        let path = layout.root().join("bin").join("tool");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        assert_eq!(find_script("bin/tool", &layout).unwrap(), path);
    }

    #[test]
    fn finds_absolute_path() {
        let (_temp, layout) = setup();
        let other = TempDir::new().unwrap();
        let path = other.path().join("x.sh");
        fs::write(&path, "").unwrap();

        assert_eq!(find_script(path.to_str().unwrap(), &layout).unwrap(), path);
    }

    #[test]
    fn finds_script_with_and_without_extension() {
        let (_temp, layout) = setup();
        let bare = layout.scripts_dir().join("lint");
        let ext = layout.scripts_dir().join("fmt.sh");
        fs::write(&bare, "").unwrap();
        fs::write(&ext, "").unwrap();

        assert_eq!(find_script("lint", &layout).unwrap(), bare);
        assert_eq!(find_script("fmt", &layout).unwrap(), ext);
    }

    #[test]
    fn falls_back_to_tasks_dir() {
        let (_temp, layout) = setup();
        let task = layout.tasks_dir().join("pants.sh");
        fs::write(&task, "").unwrap();

        assert_eq!(find_script("pants", &layout).unwrap(), task);
    }

    #[test]
    fn scripts_dir_wins_over_tasks_dir() {
        let (_temp, layout) = setup();
        let script = layout.scripts_dir().join("pants.sh");
        fs::write(&script, "").unwrap();
        fs::write(layout.tasks_dir().join("pants.sh"), "").unwrap();

        assert_eq!(find_script("pants", &layout).unwrap(), script);
    }

    #[test]
    fn directories_do_not_match() {
        let (_temp, layout) = setup();
        assert!(find_script("scripts", &layout).is_err());
    }

    #[test]
    fn missing_script_lists_candidates() {
        let (_temp, layout) = setup();
        match find_script("missing-script", &layout).unwrap_err() {
            UpkeepError::ScriptNotFound { name, searched } => {
                assert_eq!(name, "missing-script");
                assert_eq!(searched, candidates("missing-script", &layout));
                assert_eq!(searched.len(), 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
