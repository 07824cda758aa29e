//! Registered upkeep tasks.

use std::fs;
use std::path::Path;

use crate::environment::Layout;
use crate::error::Result;

/// A task script found in the tasks directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// File stem of the script; the name passed to the task executor.
    pub name: String,
    /// First comment line after the shebang, if any.
    pub description: Option<String>,
}

/// All tasks under one tasks directory, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Scan the layout's tasks directory.
    pub fn discover(layout: &Layout) -> Result<Self> {
        Self::from_dir(layout.tasks_dir())
    }

    /// Scan a directory for `*.sh` task scripts (not recursive).
    ///
    /// A missing directory yields an empty registry.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            tracing::debug!("No tasks directory at {}", dir.display());
            return Ok(Self::default());
        }

        let mut tasks = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "sh") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let description = fs::read_to_string(&path)
                .ok()
                .and_then(|content| describe(&content));

            tasks.push(Task {
                name: name.to_string(),
                description,
            });
        }

        tasks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Description of a script: its first comment line, ignoring the shebang.
fn describe(content: &str) -> Option<String> {
    content
        .lines()
        .skip_while(|l| l.starts_with("#!"))
        .map(str::trim)
        .find(|l| !l.is_empty())
        .filter(|l| l.starts_with('#'))
        .map(|l| l.trim_start_matches('#').trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_task(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let registry = TaskRegistry::from_dir(&temp.path().join("tasks")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn discovers_sorted_shell_scripts() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("tasks");
        write_task(&dir, "pants.sh", "#!/bin/bash\n");
        write_task(&dir, "python.sh", "#!/bin/bash\n");
        write_task(&dir, "go.sh", "#!/bin/bash\n");
        write_task(&dir, "README.md", "not a task");
        fs::create_dir_all(dir.join("lib.sh")).unwrap();

        let registry = TaskRegistry::from_dir(&dir).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["go", "pants", "python"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn description_comes_from_first_comment() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("tasks");
        write_task(
            &dir,
            "node.sh",
            "#!/bin/bash\n\n# Install the pinned node toolchain\nset -e\n",
        );
        write_task(&dir, "bare.sh", "#!/bin/bash\nset -e\n");

        let registry = TaskRegistry::from_dir(&dir).unwrap();
        assert_eq!(
            registry.get("node").unwrap().description.as_deref(),
            Some("Install the pinned node toolchain")
        );
        assert_eq!(registry.get("bare").unwrap().description, None);
    }

    #[test]
    fn describe_ignores_empty_comment() {
        assert_eq!(describe("#!/bin/sh\n#\n"), None);
        assert_eq!(describe("# Top line\n"), Some("Top line".to_string()));
    }
}
