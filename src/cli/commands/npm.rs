//! Npm command implementation.
//!
//! The `roboconf npm` command requires node and installs npm when missing.

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, RunSettings};
use super::display::warn_failed_steps;

/// The npm command implementation.
pub struct NpmCommand<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a RunSettings,
}

impl<'a> NpmCommand<'a> {
    /// Create a new npm command.
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a RunSettings) -> Self {
        Self { runner, settings }
    }
}

impl Command for NpmCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.settings.provisioner(self.runner, &mut *ui).npm()?;
        warn_failed_steps(ui, &report);
        Ok(CommandResult::success())
    }
}
