//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::SkipFlags;
use crate::environment::{ensure_environ_link, resolve_root, EnvironFile, Layout};
use crate::error::Result;
use crate::router::{resolve, Request, Route, RouterConfig};
use crate::ui::UserInterface;

use super::delegate::DelegateCommand;
use super::help::HelpCommand;
use super::tasks::TasksCommand;

/// Trait for command implementations.
///
/// Each route the router can take implements this trait to provide its
/// execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a child's exit code.
    pub fn from_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }

    /// The exit code as a process status byte.
    ///
    /// Codes outside `0..=255` become 1.
    pub fn status_byte(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

impl From<Option<&Commands>> for Request {
    fn from(command: Option<&Commands>) -> Self {
        match command {
            None => Request::Default,
            Some(Commands::Check(a)) => Request::Check {
                args: a.args.clone(),
            },
            Some(Commands::Force(a)) => Request::Force {
                args: a.args.clone(),
            },
            Some(Commands::Help(_)) => Request::Help,
            Some(Commands::Tasks(_)) => Request::Tasks,
            Some(Commands::TaskList(_)) => Request::TaskList,
            Some(Commands::Run(a)) => Request::Run {
                name: a.name.clone(),
                args: a.args.clone(),
            },
            Some(Commands::Task(argv)) => Request::Task { argv: argv.clone() },
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: RouterConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a resolved configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Build the dispatcher from parsed CLI flags and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (root, source) = resolve_root(cli.root.as_deref())?;
        tracing::debug!("Upkeep root {} (from {})", root.display(), source);

        let layout = Layout::load(&root)?;
        let flags = SkipFlags::from_env();
        tracing::debug!("Skip flags: {:?}", flags);

        Ok(Self::new(RouterConfig::new(layout, flags)))
    }

    /// Get the router configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Repairs the `environ.sh` link, loads the environment it points at,
    /// resolves the route and executes it. `help` does none of that.
    pub fn dispatch(
        &self,
        command: Option<&Commands>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        self.dispatch_request(&Request::from(command), ui)
    }

    /// Dispatch an already converted request.
    pub fn dispatch_request(
        &self,
        request: &Request,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let layout = &self.config.layout;
        if *request != Request::Help {
            ensure_environ_link(layout)?;
        }

        match resolve(request, &self.config)? {
            Route::Help => HelpCommand.execute(ui),
            Route::ListTasks(format) => TasksCommand::new(layout, format).execute(ui),
            Route::Skipped { command } => {
                tracing::info!("Skipping '{}': SKIP_UPKEEP is set", command);
                Ok(CommandResult::success())
            }
            Route::Delegate(dispatch) => {
                let env = self.child_env()?;
                DelegateCommand::new(dispatch, env).execute(ui)
            }
        }
    }

    /// Exported root variables followed by everything `environ.sh` defines.
    fn child_env(&self) -> Result<Vec<(String, String)>> {
        let layout = &self.config.layout;
        let mut env = layout.exported_vars();
        let environ = EnvironFile::load_optional(&layout.environ_link(), &env)?;
        env.extend(environ.vars().iter().cloned());
        Ok(env)
    }
}
