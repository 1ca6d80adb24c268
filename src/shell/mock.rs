//! Recording command runner for testing.
//!
//! `RecordingRunner` answers probes from a configured set of installed
//! tools and records every command it is asked to run, without spawning
//! anything.
//!
//! # Example
//!
//! ```
//! use roboconf::shell::{CommandLine, CommandOptions, CommandRunner, RecordingRunner};
//!
//! let runner = RecordingRunner::with_tools(["git"]);
//! runner.fail_with("git submodule sync", 128);
//!
//! let result = runner
//!     .run(&CommandLine::new("git").args(["submodule", "sync"]), &CommandOptions::default())
//!     .unwrap();
//!
//! assert_eq!(result.exit_code, Some(128));
//! assert_eq!(runner.commands(), ["git submodule sync"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::time::Duration;

use crate::error::{Result, RoboconfError};

use super::command::{CommandLine, CommandOptions, CommandResult, CommandRunner};
use super::probe::probe_target;

/// Command runner that records calls instead of spawning processes.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    installed: RefCell<HashSet<String>>,
    exit_codes: RefCell<HashMap<String, i32>>,
    unstartable: RefCell<HashSet<String>>,
    calls: RefCell<Vec<(CommandLine, CommandOptions)>>,
}

impl RecordingRunner {
    /// Create a runner where no tool is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner where exactly `tools` are installed.
    pub fn with_tools<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runner = Self::new();
        for tool in tools {
            runner.install(tool);
        }
        runner
    }

    /// Mark a tool as installed, so probes for it succeed.
    pub fn install(&self, tool: impl Into<String>) {
        self.installed.borrow_mut().insert(tool.into());
    }

    /// Make the command rendering as `command` exit with `code`.
    pub fn fail_with(&self, command: &str, code: i32) {
        self.exit_codes
            .borrow_mut()
            .insert(command.to_string(), code);
    }

    /// Make the command rendering as `command` fail to start.
    pub fn refuse(&self, command: &str) {
        self.unstartable.borrow_mut().insert(command.to_string());
    }

    /// Every call, probes included, in order.
    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Rendered non-probe commands, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(c, _)| probe_target(c).is_none())
            .map(|(c, _)| c.to_string())
            .collect()
    }

    /// Names that were probed, in order.
    pub fn probes(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|(c, _)| probe_target(c).map(str::to_string))
            .collect()
    }

    /// Options passed with the most recent non-probe command.
    pub fn last_command_options(&self) -> Option<CommandOptions> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find(|(c, _)| probe_target(c).is_none())
            .map(|(_, o)| o.clone())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        self.calls
            .borrow_mut()
            .push((command.clone(), options.clone()));

        if let Some(tool) = probe_target(command) {
            return Ok(if self.installed.borrow().contains(tool) {
                CommandResult::success(String::new(), String::new(), Duration::ZERO)
            } else {
                CommandResult::failure(Some(1), String::new(), String::new(), Duration::ZERO)
            });
        }

        let rendered = command.to_string();
        if self.unstartable.borrow().contains(&rendered) {
            return Err(RoboconfError::CommandNotStarted {
                command: rendered,
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        }

        match self.exit_codes.borrow().get(&rendered) {
            Some(&code) => Ok(CommandResult::failure(
                Some(code),
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::probe::probe_command;

    #[test]
    fn probes_follow_installed_set() {
        let runner = RecordingRunner::with_tools(["git"]);
        let options = CommandOptions::captured();

        assert!(runner.run(&probe_command("git"), &options).unwrap().success);
        assert!(!runner.run(&probe_command("node"), &options).unwrap().success);
        assert_eq!(runner.probes(), ["git", "node"]);
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn install_makes_later_probes_succeed() {
        let runner = RecordingRunner::new();
        let options = CommandOptions::captured();
        assert!(!runner.run(&probe_command("npm"), &options).unwrap().success);

        runner.install("npm");
        assert!(runner.run(&probe_command("npm"), &options).unwrap().success);
    }

    #[test]
    fn commands_succeed_unless_configured() {
        let runner = RecordingRunner::new();
        runner.fail_with("npm install", 2);
        runner.refuse("bundle install");

        let ok = runner
            .run(&CommandLine::new("git").arg("status"), &CommandOptions::default())
            .unwrap();
        assert!(ok.success);

        let failed = runner
            .run(&CommandLine::new("npm").arg("install"), &CommandOptions::default())
            .unwrap();
        assert_eq!(failed.exit_code, Some(2));

        let refused = runner.run(
            &CommandLine::new("bundle").arg("install"),
            &CommandOptions::default(),
        );
        assert!(refused.is_err());

        assert_eq!(
            runner.commands(),
            ["git status", "npm install", "bundle install"]
        );
    }

    #[test]
    fn records_options_of_last_command() {
        let runner = RecordingRunner::new();
        let options = CommandOptions {
            cwd: Some("/srv/app".into()),
            ..Default::default()
        };
        runner
            .run(&CommandLine::new("npm").arg("install"), &options)
            .unwrap();
        runner
            .run(&probe_command("npm"), &CommandOptions::captured())
            .unwrap();

        let last = runner.last_command_options().unwrap();
        assert_eq!(last.cwd.as_deref(), Some(std::path::Path::new("/srv/app")));
        assert_eq!(runner.calls().len(), 2);
    }
}
