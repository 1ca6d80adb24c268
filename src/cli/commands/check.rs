//! Check command implementation.
//!
//! The `roboconf check` command probes for one or more programs.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::provision::ToolProvisioner;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    runner: &'a dyn CommandRunner,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(runner: &'a dyn CommandRunner, args: CheckArgs) -> Self {
        Self { runner, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checks = ToolProvisioner::new(self.runner, &mut *ui)
            .check_all(&self.args.programs, self.args.verbal);

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&checks)?);
        }

        if checks.iter().all(|c| c.found) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
