//! Shell command execution and the command-existence probe.

pub mod command;
pub mod mock;
pub mod probe;

pub use command::{
    execute_check, CommandLine, CommandOptions, CommandResult, CommandRunner, SystemRunner,
};
pub use mock::RecordingRunner;
pub use probe::{probe_command, probe_target, PROBE_SHELL};
