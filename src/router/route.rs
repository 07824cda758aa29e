//! The dispatch table.
//!
//! [`resolve`] turns a [`Request`] into a [`Route`] without running
//! anything. The result depends only on the request, the layout, the skip
//! flags and which scripts exist.

use std::path::PathBuf;

use crate::config::SkipFlags;
use crate::environment::Layout;
use crate::error::Result;
use crate::tasks::find_script;

use super::gate::gate;

/// A parsed router command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// No command given.
    Default,
    /// `help`, with any trailing tokens ignored.
    Help,
    Check { args: Vec<String> },
    Force { args: Vec<String> },
    Tasks,
    TaskList,
    Run { name: String, args: Vec<String> },
    /// Any other token: the whole argv goes to the task executor.
    Task { argv: Vec<String> },
}

impl Request {
    /// Label used in logs and skip messages.
    pub fn label(&self) -> String {
        match self {
            Self::Default | Self::Check { .. } => "check".to_string(),
            Self::Force { .. } => "force".to_string(),
            Self::Help => "help".to_string(),
            Self::Tasks => "tasks".to_string(),
            Self::TaskList => "task-list".to_string(),
            Self::Run { name, .. } => format!("run {name}"),
            Self::Task { argv } => argv.first().cloned().unwrap_or_default(),
        }
    }
}

/// A program plus the arguments it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

/// Delegation plan: an optional check to run first, then the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub pre_check: Option<Invocation>,
    pub target: Invocation,
}

/// How tasks are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Names with descriptions.
    Human,
    /// Bare names, one per line.
    Machine,
}

/// Outcome of routing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Delegate(Dispatch),
    /// The gate is closed; nothing runs and the router exits 0.
    Skipped { command: String },
    ListTasks(ListFormat),
    /// Print usage; touches nothing on disk.
    Help,
}

/// Everything routing depends on.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub layout: Layout,
    pub flags: SkipFlags,
}

impl RouterConfig {
    pub fn new(layout: Layout, flags: SkipFlags) -> Self {
        Self { layout, flags }
    }
}

/// Resolve a request to its route.
pub fn resolve(request: &Request, config: &RouterConfig) -> Result<Route> {
    let layout = &config.layout;

    let gated = |name: &str, program: PathBuf, args: Vec<String>| -> Result<Route> {
        Ok(match gate(name, &program, &config.flags)? {
            Some(program) => Route::Delegate(Dispatch {
                pre_check: None,
                target: Invocation::new(program, args),
            }),
            None => Route::Skipped {
                command: request.label(),
            },
        })
    };

    match request {
        Request::Default => gated("check", layout.check_script(), Vec::new()),
        Request::Check { args } => gated("check", layout.check_script(), args.clone()),
        Request::Force { args } => gated("force", layout.force_script(), args.clone()),
        Request::Help => Ok(Route::Help),
        Request::Tasks => Ok(Route::ListTasks(ListFormat::Human)),
        Request::TaskList => Ok(Route::ListTasks(ListFormat::Machine)),
        Request::Task { argv } => gated(
            "execute_task",
            layout.task_executor(),
            argv.clone(),
        ),
        Request::Run { name, args } => {
            let script = find_script(name, layout)?;

            // The script itself is never gated, only the check in front of it.
            let pre_check = if config.flags.allows_upkeep() {
                match resolve(&Request::Check { args: Vec::new() }, config)? {
                    Route::Delegate(check) => Some(check.target),
                    _ => None,
                }
            } else {
                tracing::debug!("Skipping check before '{}'", name);
                None
            };

            Ok(Route::Delegate(Dispatch {
                pre_check,
                target: Invocation::new(script, args.clone()),
            }))
        }
    }
}
