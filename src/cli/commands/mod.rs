//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which repairs the
//! environment, resolves the route and hands it to:
//! - [`DelegateCommand`] for `check`, `force`, `run` and tasks
//! - [`TasksCommand`] for `tasks` and `task-list`
//! - [`HelpCommand`] for `help`

pub mod delegate;
pub mod dispatcher;
pub mod help;
pub mod tasks;

pub use delegate::DelegateCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use help::HelpCommand;
pub use tasks::TasksCommand;
