//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use chrono_tz::Tz;

use super::mode::OutputMode;
use crate::errors::CliError;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether colour output is enabled
    pub color: bool,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Suppress headers and hints
    pub quiet: bool,
    /// Zone that overrides each entry's own timezone for display
    pub zone: Option<Tz>,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        quiet: bool,
        zone: Option<Tz>,
    ) -> Result<Self, CliError> {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_env && !term_is_dumb;
        let mode = OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb)?;

        Ok(Self {
            color,
            mode,
            quiet,
            zone,
        })
    }

    /// Plain, colourless context.
    pub fn plain() -> Self {
        Self {
            color: false,
            mode: OutputMode::Plain,
            quiet: false,
            zone: None,
        }
    }
}
