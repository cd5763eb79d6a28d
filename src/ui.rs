//! Terminal formatting shared by the validators commands.

use colored::{ColoredString, Colorize};

/// Returns a colored icon for a check result.
///
/// Icons:
/// - pass: ✓ (green)
/// - fail: ✗ (red)
pub fn result_icon(valid: bool) -> ColoredString {
    if valid {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Red for failure reasons
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for validator names
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Truncate a value for display, counting characters rather than bytes
    pub fn truncate_value(value: &str, max_chars: usize) -> String {
        if value.chars().count() <= max_chars {
            value.to_string()
        } else {
            let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }
}
