//! Error types for roboconf operations.
//!
//! This module defines [`RoboconfError`], the error type returned by the
//! provisioning operations, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing required tool is returned as [`RoboconfError::MissingRequiredTool`];
//!   only the binary turns it into a process exit status
//! - A missing optional tool is not an error, it selects the install branch
//! - Failed installation commands are recorded in the report, not returned

use thiserror::Error;

/// Core error type for roboconf operations.
#[derive(Debug, Error)]
pub enum RoboconfError {
    /// A tool the operation cannot run without is not installed.
    #[error("Required tool '{tool}' is not installed")]
    MissingRequiredTool { tool: String },

    /// A command could not be started at all.
    #[error("could not start '{command}': {source}")]
    CommandNotStarted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render machine-readable output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for roboconf operations.
pub type Result<T> = std::result::Result<T, RoboconfError>;
