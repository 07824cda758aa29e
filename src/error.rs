//! Error types for upkeep operations.
//!
//! This module defines [`UpkeepError`], the error type used throughout
//! the router, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing target script is the one domain failure the router raises
//!   itself; it is always reported before anything is executed
//! - Failures inside delegated scripts are not errors here, their exit
//!   codes are propagated as-is
//! - Use `anyhow::Error` (via `UpkeepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for upkeep operations.
#[derive(Debug, Error)]
pub enum UpkeepError {
    /// No script exists for the requested action, task executor or `run` name.
    #[error("No upkeep file found for '{name}'")]
    ScriptNotFound { name: String, searched: Vec<PathBuf> },

    /// The environment root does not exist.
    #[error("Upkeep root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to parse `upkeep.yml`.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The `environ.sh` symlink could not be repaired.
    #[error("Failed to link {link} -> {target}: {source}")]
    EnvironLink {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A delegated script could not be started.
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for upkeep operations.
pub type Result<T> = std::result::Result<T, UpkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_not_found_displays_name() {
        let err = UpkeepError::ScriptNotFound {
            name: "missing-script".into(),
            searched: vec![PathBuf::from("/root/scripts/missing-script")],
        };
        let msg = err.to_string();
        assert!(msg.contains("No upkeep file found"));
        assert!(msg.contains("missing-script"));
    }

    #[test]
    fn root_not_found_displays_path() {
        let err = UpkeepError::RootNotFound {
            path: PathBuf::from("/nowhere"),
        };
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = UpkeepError::ConfigParseError {
            path: PathBuf::from("/upkeep.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/upkeep.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn environ_link_displays_both_paths() {
        let err = UpkeepError::EnvironLink {
            link: PathBuf::from("/r/environ.sh"),
            target: PathBuf::from("/r/config/environ.sh"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/r/environ.sh"));
        assert!(msg.contains("/r/config/environ.sh"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn spawn_error_displays_program() {
        let err = UpkeepError::Spawn {
            program: PathBuf::from("/r/check.sh"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/r/check.sh"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: UpkeepError = io_err.into();
        assert!(matches!(err, UpkeepError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: UpkeepError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
