//! Command execution.
//!
//! Provisioning never spawns processes directly. It hands a [`CommandLine`]
//! to a [`CommandRunner`], so tests can substitute a runner that records
//! commands instead of executing them.

use crate::error::{Result, RoboconfError};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program and its arguments, run without an intermediate shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Start a command line for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both streams, keeping the child silent.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }
}

/// Capability for running external commands.
///
/// Returns `Ok` whenever the process ran to completion, whatever its exit
/// code. `Err` means the process could not be started at all.
pub trait CommandRunner {
    /// Run a command and wait for it to finish.
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        let start = Instant::now();

        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments());

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        if options.capture_stdout {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        if options.capture_stderr {
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stderr(Stdio::inherit());
        }

        tracing::debug!("Running: {}", command);

        let output = cmd
            .output()
            .map_err(|source| RoboconfError::CommandNotStarted {
                command: command.to_string(),
                source,
            })?;

        let duration = start.elapsed();

        let stdout = if options.capture_stdout {
            String::from_utf8_lossy(&output.stdout).to_string()
        } else {
            String::new()
        };

        let stderr = if options.capture_stderr {
            String::from_utf8_lossy(&output.stderr).to_string()
        } else {
            String::new()
        };

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

/// Run a command silently and return success/failure.
///
/// A command that cannot be started counts as a failure.
pub fn execute_check(runner: &dyn CommandRunner, command: &CommandLine) -> bool {
    runner
        .run(command, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandLine {
        CommandLine::new("/bin/sh").arg("-c").arg(script)
    }

    #[test]
    fn command_line_displays_program_and_args() {
        let cmd = CommandLine::new("git").args(["submodule", "init"]);
        assert_eq!(cmd.to_string(), "git submodule init");
        assert_eq!(cmd.program(), "git");
        assert_eq!(cmd.arguments(), ["submodule", "init"]);
    }

    #[test]
    fn command_line_without_args_displays_program_only() {
        assert_eq!(CommandLine::new("npm").to_string(), "npm");
    }

    #[test]
    fn captured_options_capture_both_streams() {
        let options = CommandOptions::captured();
        assert!(options.capture_stdout);
        assert!(options.capture_stderr);
        assert!(options.cwd.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = SystemRunner::new()
            .run(&sh("echo hello"), &CommandOptions::captured())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command() {
        let result = SystemRunner::new()
            .run(&sh("exit 3"), &CommandOptions::captured())
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..CommandOptions::captured()
        };

        let result = SystemRunner::new().run(&sh("pwd"), &options).unwrap();

        assert!(result.success);
        let dir_name = temp.path().file_name().unwrap().to_string_lossy();
        assert!(result.stdout.contains(dir_name.as_ref()));
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = SystemRunner::new()
            .run(
                &CommandLine::new("roboconf-no-such-program-xyz"),
                &CommandOptions::captured(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            RoboconfError::CommandNotStarted { ref command, .. } if command == "roboconf-no-such-program-xyz"
        ));
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_check_returns_bool() {
        let runner = SystemRunner::new();
        assert!(execute_check(&runner, &sh("exit 0")));
        assert!(!execute_check(&runner, &sh("exit 1")));
    }

    #[test]
    fn execute_check_treats_spawn_failure_as_false() {
        let runner = SystemRunner::new();
        assert!(!execute_check(
            &runner,
            &CommandLine::new("roboconf-no-such-program-xyz")
        ));
    }
}
