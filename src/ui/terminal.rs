//! Terminal UI writing to the process's standard streams.

use super::theme::{should_use_colors, RoboconfTheme};
use super::{OutputMode, UserInterface};

/// UI implementation that prints to stdout/stderr.
///
/// Status messages are printed exactly as given; only warning and error
/// lines carry styling.
pub struct TerminalUI {
    mode: OutputMode,
    theme: RoboconfTheme,
}

impl TerminalUI {
    /// Create a console UI, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            RoboconfTheme::new()
        } else {
            RoboconfTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a console UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: RoboconfTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.warning.apply_to(format!("⚠ {}", msg)));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(format!("✗ {}", msg)));
    }
}
