//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands never exit the process
//! themselves; a missing required tool comes back as an error and the
//! binary turns it into exit status 1.

pub mod bundler;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod git_modules;
pub mod npm;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, RunSettings};
