//! upkeep - Repository upkeep dispatcher.
//!
//! upkeep routes a command to one of the scripts in its root directory:
//! the `check` and `force` actions, a named helper script (`run`), or the
//! task executor for anything else. Before dispatching it keeps the
//! `environ.sh` symlink pointing at the right environment source and
//! exports `BUILD_ROOT`, `UPKEEP_ROOT` and `DEPENDENCIES_ROOT`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `upkeep.yml` settings and skip flags
//! - [`environment`] - Root layout, exported variables and `environ.sh`
//! - [`error`] - Error types and result aliases
//! - [`router`] - The dispatch table and the skip gate
//! - [`shell`] - Child-process delegation
//! - [`tasks`] - Task registry and script lookup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use upkeep::config::SkipFlags;
//! use upkeep::environment::Layout;
//! use upkeep::router::{resolve, Request, Route, RouterConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("execute_task.sh"), "#!/bin/sh\n").unwrap();
//!
//! let layout = Layout::load(temp.path()).unwrap();
//! let config = RouterConfig::new(layout.clone(), SkipFlags::default());
//! let request = Request::Task { argv: vec!["mytask".into(), "--all".into()] };
//!
//! match resolve(&request, &config).unwrap() {
//!     Route::Delegate(dispatch) => {
//!         assert_eq!(dispatch.target.program, layout.task_executor());
//!         assert_eq!(dispatch.target.args, vec!["mytask", "--all"]);
//!     }
//!     other => panic!("unexpected route: {other:?}"),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod router;
pub mod shell;
pub mod tasks;
pub mod ui;

pub use error::{Result, UpkeepError};
