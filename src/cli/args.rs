//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Any other COMMAND is treated as a task name and handed to execute_task.sh
together with its arguments.

Environment:
  SKIP_UPKEEP   Skip check, force and task execution (run still executes its script)
  SKIP_TASKS    Run gated commands even when SKIP_UPKEEP is set

Scripts receive BUILD_ROOT, UPKEEP_ROOT, DEPENDENCIES_ROOT and every
variable defined in environ.sh.";

/// upkeep - Repository upkeep dispatcher.
#[derive(Debug, Parser)]
#[command(name = "upkeep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Upkeep root (defaults to the directory holding this executable)
    #[arg(long, env = "UPKEEP_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the force action
    #[command(disable_help_flag = true)]
    Force(PassthroughArgs),

    /// Run the check action (default if no command specified)
    #[command(disable_help_flag = true)]
    Check(PassthroughArgs),

    /// Print this help
    #[command(disable_help_flag = true)]
    Help(IgnoredArgs),

    /// List all registered tasks
    #[command(disable_help_flag = true)]
    Tasks(IgnoredArgs),

    /// Print registered task names, one per line
    #[command(name = "task-list", disable_help_flag = true)]
    TaskList(IgnoredArgs),

    /// Run a named script or path, running check first unless upkeep is skipped
    #[command(disable_help_flag = true)]
    Run(RunArgs),

    /// Execute a task by name
    #[command(external_subcommand)]
    Task(Vec<String>),
}

/// Arguments forwarded verbatim to an action script.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PassthroughArgs {
    /// Arguments for the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Trailing tokens accepted and discarded by commands that take none.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct IgnoredArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Script name or path
    pub name: String,

    /// Arguments for the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
