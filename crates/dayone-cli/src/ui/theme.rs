//! Colour styles for terminal output.

use owo_colors::{OwoColorize, Style};

/// Styles used across the CLI.
pub mod styles {
    use owo_colors::Style;

    /// Titles and entry timestamps
    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Starred marker
    pub fn star() -> Style {
        Style::new().yellow()
    }

    /// Tag names
    pub fn tag() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` when colour is enabled, otherwise return the text unchanged.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
