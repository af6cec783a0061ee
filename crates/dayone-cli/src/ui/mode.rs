//! Output mode routing logic.

use crate::errors::CliError;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Tables with optional colour
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` is exclusive and cannot be combined with `--format`
    /// 2. `--format plain` forces plain, `--format table` forces tables
    /// 3. `TERM=dumb` forces plain
    /// 4. Otherwise tables only when stdout is a TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Result<Self, CliError> {
        if json_flag {
            if format_flag.is_some() {
                return Err(CliError::invalid_input("--format cannot be used with --json"));
            }
            return Ok(Self::Json);
        }

        match format_flag {
            Some("plain") => return Ok(Self::Plain),
            Some("table") => return Ok(Self::Pretty),
            Some(other) => {
                return Err(CliError::invalid_input(format!(
                    "Invalid format: {} (expected table or plain)",
                    other
                )))
            }
            None => {}
        }

        if is_tty && !term_is_dumb {
            Ok(Self::Pretty)
        } else {
            Ok(Self::Plain)
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
