//! Command-existence probe.
//!
//! A tool counts as installed when the POSIX shell's `hash` builtin can
//! resolve it. The name is passed as a positional parameter rather than
//! spliced into the script, so it is never re-parsed by the shell.

use super::command::CommandLine;

/// Shell used to run the probe.
pub const PROBE_SHELL: &str = "/bin/sh";

const PROBE_SCRIPT: &str = "hash \"$1\"";

/// `$0` for the probe shell.
const PROBE_ARGV0: &str = "sh";

/// Build the probe command for `program`.
pub fn probe_command(program: &str) -> CommandLine {
    CommandLine::new(PROBE_SHELL).args(["-c", PROBE_SCRIPT, PROBE_ARGV0, program])
}

/// If `command` is a probe, return the program it probes for.
pub fn probe_target(command: &CommandLine) -> Option<&str> {
    match command.arguments() {
        [flag, script, argv0, program]
            if command.program() == PROBE_SHELL
                && flag == "-c"
                && script == PROBE_SCRIPT
                && argv0 == PROBE_ARGV0 =>
        {
            Some(program.as_str())
        }
        _ => None,
    }
}
