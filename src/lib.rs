//! Roboconf - tool detection and dependency provisioning for setup scripts.
//!
//! Roboconf checks whether external tools (git, node, npm, bundler, rvm,
//! gem) are installed, runs `git submodule` maintenance, and installs
//! dependency managers when they are missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`provision`] - Tool probes and provisioning operations
//! - [`shell`] - Command execution and the existence probe
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use roboconf::provision::ToolProvisioner;
//! use roboconf::shell::RecordingRunner;
//! use roboconf::ui::MockUI;
//!
//! let runner = RecordingRunner::with_tools(["git"]);
//! let mut ui = MockUI::new();
//! let report = ToolProvisioner::new(&runner, &mut ui).git_modules().unwrap();
//!
//! assert_eq!(
//!     report.commands(),
//!     ["git submodule init", "git submodule sync", "git submodule update"]
//! );
//! ```
//!
//! Use [`shell::SystemRunner`] to run real processes.

pub mod cli;
pub mod error;
pub mod provision;
pub mod shell;
pub mod ui;

pub use error::{Result, RoboconfError};
