//! Records of what a provisioning operation did.

use serde::Serialize;

use crate::error::{Result, RoboconfError};
use crate::shell::{CommandLine, CommandResult};

/// The result of probing for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    /// Program name that was probed.
    pub name: String,
    /// Whether the probe succeeded.
    pub found: bool,
}

/// How a single provisioning command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exited with status 0.
    Succeeded,
    /// Ran but exited non-zero (None if killed by signal).
    Failed { exit_code: Option<i32> },
    /// Could not be started.
    NotStarted { reason: String },
    /// Not run because of dry-run mode.
    Skipped,
}

impl CommandOutcome {
    /// Classify what a runner returned.
    pub fn from_result(result: Result<CommandResult>) -> Self {
        match result {
            Ok(r) if r.success => Self::Succeeded,
            Ok(r) => Self::Failed {
                exit_code: r.exit_code,
            },
            Err(RoboconfError::CommandNotStarted { source, .. }) => Self::NotStarted {
                reason: source.to_string(),
            },
            Err(e) => Self::NotStarted {
                reason: e.to_string(),
            },
        }
    }

    /// Whether the command was attempted and did not succeed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::NotStarted { .. })
    }
}

/// One command issued by a provisioning operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The command as issued.
    pub command: CommandLine,
    /// How it ended.
    pub outcome: CommandOutcome,
}

impl StepRecord {
    /// Human-readable description of a failed step, if it failed.
    pub fn failure_message(&self) -> Option<String> {
        match &self.outcome {
            CommandOutcome::Failed {
                exit_code: Some(code),
            } => Some(format!("'{}' exited with code {}", self.command, code)),
            CommandOutcome::Failed { exit_code: None } => {
                Some(format!("'{}' was terminated by a signal", self.command))
            }
            CommandOutcome::NotStarted { reason } => {
                Some(format!("'{}' could not be started: {}", self.command, reason))
            }
            CommandOutcome::Succeeded | CommandOutcome::Skipped => None,
        }
    }
}

/// Commands a provisioning operation issued, in issue order.
///
/// Probes are not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    steps: Vec<StepRecord>,
}

impl ProvisionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, command: CommandLine, outcome: CommandOutcome) {
        self.steps.push(StepRecord { command, outcome });
    }

    /// All recorded steps.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Rendered command lines, in order.
    pub fn commands(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.command.to_string()).collect()
    }

    /// Steps that were attempted and did not succeed.
    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| s.outcome.is_failure())
    }

    /// Whether no command was issued.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
