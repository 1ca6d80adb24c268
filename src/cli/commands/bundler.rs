//! Bundler command implementation.
//!
//! The `roboconf bundler` command installs bundler when it is missing and
//! then always runs `bundle install`.

use crate::cli::args::BundlerArgs;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, RunSettings};
use super::display::warn_failed_steps;

/// The bundler command implementation.
pub struct BundlerCommand<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a RunSettings,
    args: BundlerArgs,
}

impl<'a> BundlerCommand<'a> {
    /// Create a new bundler command.
    pub fn new(
        runner: &'a dyn CommandRunner,
        settings: &'a RunSettings,
        args: BundlerArgs,
    ) -> Self {
        Self {
            runner,
            settings,
            args,
        }
    }
}

impl Command for BundlerCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self
            .settings
            .provisioner(self.runner, &mut *ui)
            .bundler(self.args.bundler_version.as_deref(), &self.args.bundle_args)?;
        warn_failed_steps(ui, &report);
        Ok(CommandResult::success())
    }
}
