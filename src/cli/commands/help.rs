//! `upkeep help`.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the same usage text as `--help`.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let help = Cli::command().render_help().to_string();
        ui.raw(help.trim_end());
        Ok(CommandResult::success())
    }
}
