//! Shared display helpers for command output.

use crate::provision::ProvisionReport;
use crate::ui::UserInterface;

/// Warn about every step of `report` that did not succeed.
///
/// Failed steps never change the exit status, they are only surfaced.
pub fn warn_failed_steps(ui: &mut dyn UserInterface, report: &ProvisionReport) {
    for message in report.failures().filter_map(|s| s.failure_message()) {
        ui.warning(&message);
    }
}
