//! Tool detection and dependency provisioning.
//!
//! [`ToolProvisioner`] probes for external programs and, depending on what
//! it finds, installs package managers or runs their install commands.
//!
//! # Modules
//!
//! - [`provisioner`] - The probe/branch/run operations
//! - [`report`] - Records of issued commands and probe results
//! - [`tools`] - Tool names and the command lines built for them
//!
//! # Example
//!
//! ```
//! use roboconf::provision::ToolProvisioner;
//! use roboconf::shell::RecordingRunner;
//! use roboconf::ui::MockUI;
//!
//! let runner = RecordingRunner::with_tools(["node"]);
//! let mut ui = MockUI::new();
//! let report = ToolProvisioner::new(&runner, &mut ui).npm().unwrap();
//!
//! assert_eq!(report.commands(), ["npm install"]);
//! ```

pub mod provisioner;
pub mod report;
pub mod tools;

pub use provisioner::ToolProvisioner;
pub use report::{CommandOutcome, ProvisionReport, StepRecord, ToolCheck};
