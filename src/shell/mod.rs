//! Child-process execution.

pub mod command;

pub use command::{delegate, exit_code};
