//! Upkeep tasks and helper scripts.
//!
//! - [`registry`] lists the tasks behind `tasks` / `task-list`
//! - [`finder`] resolves the script named by `run`

pub mod finder;
pub mod registry;

pub use finder::{candidates, find_script};
pub use registry::{Task, TaskRegistry};
