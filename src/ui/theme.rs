//! Visual theme and styling.

use console::Style;

/// Styles for the few decorated lines roboconf prints.
///
/// Plain status lines (probe results, echoed commands) are never styled so
/// that scripts parsing them see the exact text.
#[derive(Debug, Clone)]
pub struct RoboconfTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for RoboconfTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RoboconfTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Warnings and errors go to stderr
    console::Term::stderr().is_term()
}
