//! Tool detection and conditional dependency installation.
//!
//! Every operation is a straight line of probes and commands: check,
//! branch, run. Nothing is retried and nothing is re-checked after an
//! install. A command that fails is logged and recorded in the returned
//! [`ProvisionReport`] but never stops the sequence.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, RoboconfError};
use crate::shell::{execute_check, probe_command, CommandLine, CommandOptions, CommandRunner};
use crate::ui::UserInterface;

use super::report::{CommandOutcome, ProvisionReport, ToolCheck};
use super::tools::{self, BUNDLER, GEM, GIT, NODE, NPM, RVM};

/// Detects tools and installs the missing ones.
pub struct ToolProvisioner<'a> {
    runner: &'a dyn CommandRunner,
    ui: &'a mut dyn UserInterface,
    cwd: Option<PathBuf>,
    dry_run: bool,
}

impl<'a> ToolProvisioner<'a> {
    /// Create a provisioner issuing commands through `runner`.
    pub fn new(runner: &'a dyn CommandRunner, ui: &'a mut dyn UserInterface) -> Self {
        Self {
            runner,
            ui,
            cwd: None,
            dry_run: false,
        }
    }

    /// Run installation commands in `cwd` instead of the current directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// In dry-run mode probes still run, other commands are only echoed.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether `program` can be resolved by the shell.
    ///
    /// Prints `checking for <program>...`. A probe that cannot be started
    /// counts as not found.
    pub fn check(&mut self, program: &str) -> bool {
        self.ui.message(&format!("checking for {}...", program));
        let found = execute_check(self.runner, &probe_command(program));
        debug!("Probe for '{}': found={}", program, found);
        found
    }

    /// Like [`check`](Self::check), then prints whether the program was found.
    pub fn check_verbal(&mut self, program: &str) -> bool {
        let found = self.check(program);
        self.ui.message(&format!(
            "Program {} is{} found",
            program,
            if found { "" } else { "not" }
        ));
        found
    }

    /// Probe several programs, returning one record per name.
    pub fn check_all<S: AsRef<str>>(&mut self, programs: &[S], verbal: bool) -> Vec<ToolCheck> {
        programs
            .iter()
            .map(|p| {
                let name = p.as_ref();
                let found = if verbal {
                    self.check_verbal(name)
                } else {
                    self.check(name)
                };
                ToolCheck {
                    name: name.to_string(),
                    found,
                }
            })
            .collect()
    }

    /// Bring git submodules up to date: `init`, `sync`, then `update`.
    ///
    /// Fails without running anything if git is missing. Each submodule
    /// command runs regardless of how the previous one ended.
    pub fn git_modules(&mut self) -> Result<ProvisionReport> {
        if !self.check(GIT) {
            return Err(RoboconfError::MissingRequiredTool {
                tool: GIT.to_string(),
            });
        }

        let mut report = ProvisionReport::new();
        for action in tools::SUBMODULE_ACTIONS {
            self.run_step(tools::submodule_command(action), &mut report);
        }
        Ok(report)
    }

    /// Make sure bundler is installed, then install the bundle.
    ///
    /// `rvm` and `gem` are probed for information only. Bundler is
    /// installed (pinned to `version` unless it is blank) when missing.
    /// `bundle install` with `extra_args` always runs afterwards.
    pub fn bundler(
        &mut self,
        version: Option<&str>,
        extra_args: &[String],
    ) -> Result<ProvisionReport> {
        self.check_verbal(RVM);
        self.check_verbal(GEM);

        let mut report = ProvisionReport::new();
        if !self.check_verbal(BUNDLER) {
            self.echo_step(tools::gem_install_bundler(version), &mut report);
        }
        self.echo_step(tools::bundle_install(extra_args), &mut report);
        Ok(report)
    }

    /// Require node and install npm when it is missing.
    ///
    /// When npm is already present nothing is run, not even `npm install`.
    pub fn npm(&mut self) -> Result<ProvisionReport> {
        if !self.check_verbal(NODE) {
            return Err(RoboconfError::MissingRequiredTool {
                tool: NODE.to_string(),
            });
        }

        let mut report = ProvisionReport::new();
        if !self.check_verbal(NPM) {
            self.echo_step(tools::npm_install(), &mut report);
        }
        Ok(report)
    }

    fn echo_step(&mut self, command: CommandLine, report: &mut ProvisionReport) {
        self.ui.message(&command.to_string());
        self.run_step(command, report);
    }

    fn run_step(&mut self, command: CommandLine, report: &mut ProvisionReport) {
        let outcome = if self.dry_run {
            debug!("Dry run, skipping: {}", command);
            CommandOutcome::Skipped
        } else {
            let options = CommandOptions {
                cwd: self.cwd.clone(),
                ..Default::default()
            };
            CommandOutcome::from_result(self.runner.run(&command, &options))
        };

        if outcome.is_failure() {
            debug!("'{}' did not succeed: {:?}", command, outcome);
        }
        report.push(command, outcome);
    }
}
