//! Delegation to upkeep scripts.

use crate::error::{Result, UpkeepError};
use crate::router::Invocation;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

/// Run an invocation to completion with inherited stdio.
///
/// The program is started directly so its shebang picks the interpreter.
/// `env` is layered over the router's own environment.
pub fn delegate(invocation: &Invocation, env: &[(String, String)]) -> Result<ExitStatus> {
    let start = Instant::now();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);

    for (key, value) in env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    tracing::debug!(
        "Executing {} {:?}",
        invocation.program.display(),
        invocation.args
    );

    let status = cmd.status().map_err(|source| UpkeepError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    tracing::debug!(
        "{} exited with {} after {:?}",
        invocation.program.display(),
        status,
        start.elapsed()
    );

    Ok(status)
}

/// Exit code the router should report for a finished child.
///
/// A child killed by signal `N` maps to `128 + N`, matching the shell.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh(script: &str) -> Invocation {
        Invocation::new(
            PathBuf::from("/bin/sh"),
            vec!["-c".to_string(), script.to_string()],
        )
    }

    #[test]
    fn propagates_exit_code() {
        let status = delegate(&sh("exit 7"), &[]).unwrap();
        assert_eq!(exit_code(&status), 7);
    }

    #[test]
    fn success_is_zero() {
        let status = delegate(&sh("true"), &[]).unwrap();
        assert!(status.success());
        assert_eq!(exit_code(&status), 0);
    }

    #[test]
    fn passes_environment() {
        let env = vec![("UPKEEP_TEST_VALUE".to_string(), "42".to_string())];
        let status = delegate(&sh("test \"$UPKEEP_TEST_VALUE\" = 42"), &env).unwrap();
        assert!(status.success());
    }

    #[test]
    fn signal_maps_to_128_plus() {
        let status = delegate(&sh("kill -TERM $$"), &[]).unwrap();
        assert_eq!(exit_code(&status), 128 + 15);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let inv = Invocation::new(PathBuf::from("/definitely/not/here"), vec![]);
        let err = delegate(&inv, &[]).unwrap_err();
        assert!(matches!(err, UpkeepError::Spawn { .. }));
    }
}
