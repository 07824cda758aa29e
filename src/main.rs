//! upkeep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use upkeep::cli::{Cli, Command, CommandDispatcher, Commands, HelpCommand};
use upkeep::ui::{TerminalUI, UserInterface};
use upkeep::UpkeepError;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so `task-list` output stays clean, and carry ANSI
/// styling only when stderr is a terminal and `NO_COLOR` is unset.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("upkeep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("upkeep=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(stderr_colors())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stderr().is_term()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug);
    tracing::debug!("upkeep starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    // `help` needs no root, like `--help`.
    if let Some(Commands::Help(_)) = cli.command {
        return match HelpCommand.execute(&mut ui) {
            Ok(result) => ExitCode::from(result.status_byte()),
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                ExitCode::from(1)
            }
        };
    }

    let result = CommandDispatcher::from_cli(&cli)
        .and_then(|dispatcher| dispatcher.dispatch(cli.command.as_ref(), &mut ui));

    match result {
        Ok(result) => ExitCode::from(result.status_byte()),
        Err(e) => {
            if let UpkeepError::ScriptNotFound { searched, .. } = &e {
                tracing::debug!("Searched: {:?}", searched);
            }
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
