//! Delegation to action, task and helper scripts.
//!
//! Covers `check`, `force`, `run` and the task fallback: each resolves to a
//! [`Dispatch`] that this command executes.

use crate::error::Result;
use crate::router::Dispatch;
use crate::shell::{delegate, exit_code};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs a resolved dispatch and reports the child's exit code.
pub struct DelegateCommand {
    dispatch: Dispatch,
    env: Vec<(String, String)>,
}

impl DelegateCommand {
    /// Create a new delegate command.
    pub fn new(dispatch: Dispatch, env: Vec<(String, String)>) -> Self {
        Self { dispatch, env }
    }
}

impl Command for DelegateCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(check) = &self.dispatch.pre_check {
            let status = delegate(check, &self.env)?;
            if !status.success() {
                tracing::debug!(
                    "Check failed, not running {}",
                    self.dispatch.target.program.display()
                );
                return Ok(CommandResult::failure(exit_code(&status)));
            }
        }

        let status = delegate(&self.dispatch.target, &self.env)?;
        Ok(CommandResult::from_code(exit_code(&status)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::router::Invocation;
    use crate::ui::MockUI;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn runs_target_and_reports_code() {
        let temp = TempDir::new().unwrap();
        let target = script(temp.path(), "t.sh", "exit 4");
        let cmd = DelegateCommand::new(
            Dispatch {
                pre_check: None,
                target: Invocation::new(target, vec![]),
            },
            vec![],
        );

        let result = cmd.execute(&mut MockUI::new()).unwrap();
        assert_eq!(result, CommandResult::failure(4));
    }

    #[test]
    fn failing_check_stops_target() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("ran");
        let check = script(temp.path(), "check.sh", "exit 3");
        let target = script(
            temp.path(),
            "t.sh",
            &format!("touch '{}'", marker.display()),
        );
        let cmd = DelegateCommand::new(
            Dispatch {
                pre_check: Some(Invocation::new(check, vec![])),
                target: Invocation::new(target, vec![]),
            },
            vec![],
        );

        let result = cmd.execute(&mut MockUI::new()).unwrap();
        assert_eq!(result, CommandResult::failure(3));
        assert!(!marker.exists());
    }

    #[test]
    fn passing_check_then_target() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("log");
        let check = script(
            temp.path(),
            "check.sh",
            &format!("echo check >> '{}'", log.display()),
        );
        let target = script(
            temp.path(),
            "t.sh",
            &format!("echo \"target $1\" >> '{}'", log.display()),
        );
        let cmd = DelegateCommand::new(
            Dispatch {
                pre_check: Some(Invocation::new(check, vec![])),
                target: Invocation::new(target, vec!["x".into()]),
            },
            vec![],
        );

        let result = cmd.execute(&mut MockUI::new()).unwrap();
        assert!(result.success);
        assert_eq!(fs::read_to_string(&log).unwrap(), "check\ntarget x\n");
    }
}
