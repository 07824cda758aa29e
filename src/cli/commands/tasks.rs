//! Tasks command implementation.
//!
//! `upkeep tasks` lists tasks with their descriptions; `upkeep task-list`
//! prints bare names for scripts and shell completion.

use std::path::PathBuf;

use crate::environment::Layout;
use crate::error::Result;
use crate::router::ListFormat;
use crate::tasks::TaskRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The tasks command implementation.
pub struct TasksCommand {
    tasks_dir: PathBuf,
    format: ListFormat,
}

impl TasksCommand {
    /// Create a new tasks command.
    pub fn new(layout: &Layout, format: ListFormat) -> Self {
        Self {
            tasks_dir: layout.tasks_dir().to_path_buf(),
            format,
        }
    }
}

impl Command for TasksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = TaskRegistry::from_dir(&self.tasks_dir)?;

        match self.format {
            ListFormat::Machine => {
                for name in registry.names() {
                    ui.raw(name);
                }
            }
            ListFormat::Human => {
                if registry.is_empty() {
                    ui.hint(&format!("No tasks found in {}", self.tasks_dir.display()));
                    return Ok(CommandResult::success());
                }

                let width = registry.names().map(str::len).max().unwrap_or(0);
                let header = ui.theme().format_header("Tasks:");
                ui.message(&header);
                for task in registry.tasks() {
                    let row = ui
                        .theme()
                        .format_task(&task.name, task.description.as_deref(), width);
                    ui.message(&row);
                }
            }
        }

        Ok(CommandResult::success())
    }
}
