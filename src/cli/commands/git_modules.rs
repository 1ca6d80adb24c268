//! Git submodule command implementation.
//!
//! The `roboconf git-modules` command runs `git submodule init`, `sync` and
//! `update`.

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, RunSettings};
use super::display::warn_failed_steps;

/// The git-modules command implementation.
pub struct GitModulesCommand<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a RunSettings,
}

impl<'a> GitModulesCommand<'a> {
    /// Create a new git-modules command.
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a RunSettings) -> Self {
        Self { runner, settings }
    }
}

impl Command for GitModulesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.settings.provisioner(self.runner, &mut *ui).git_modules()?;
        warn_failed_steps(ui, &report);
        Ok(CommandResult::success())
    }
}
