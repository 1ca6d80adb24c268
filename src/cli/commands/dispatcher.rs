//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::provision::ToolProvisioner;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
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
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit status (0 for success, non-zero for failure).
    pub exit_code: u8,
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
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings shared by the provisioning commands.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    /// Directory installation commands run in.
    pub project_root: Option<PathBuf>,

    /// Echo commands without running them.
    pub dry_run: bool,
}

impl RunSettings {
    /// Build a provisioner configured with these settings.
    pub fn provisioner<'a>(
        &self,
        runner: &'a dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
    ) -> ToolProvisioner<'a> {
        let provisioner = ToolProvisioner::new(runner, ui).dry_run(self.dry_run);
        match &self.project_root {
            Some(root) => provisioner.with_cwd(root),
            None => provisioner,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: RunSettings,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs real processes.
    pub fn new(settings: RunSettings) -> Self {
        Self {
            settings,
            runner: Box::new(SystemRunner::new()),
        }
    }

    /// Replace the command runner.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = self.runner.as_ref();
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(runner, args.clone());
                cmd.execute(ui)
            }
            Commands::GitModules => {
                let cmd = super::git_modules::GitModulesCommand::new(runner, &self.settings);
                cmd.execute(ui)
            }
            Commands::Bundler(args) => {
                let cmd =
                    super::bundler::BundlerCommand::new(runner, &self.settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Npm => {
                let cmd = super::npm::NpmCommand::new(runner, &self.settings);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
