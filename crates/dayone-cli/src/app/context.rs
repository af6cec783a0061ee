//! Application context for the Day One CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use chrono_tz::Tz;
use once_cell::unsync::OnceCell;

use dayone_core::storage::DayOneSqlite;
use dayone_core::DayOneError;

use crate::cli::Cli;
use crate::config::DayOneConfig;
use crate::errors::CliError;

use super::resolver::{load_config, missing_database_message, resolve_database_path, resolve_media_dir};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DayOneConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DayOneConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Timezone override for displayed times, from `[ui] timezone`.
    pub fn display_zone(&self) -> anyhow::Result<Option<Tz>> {
        let Some(name) = self.config()?.ui.timezone.as_deref() else {
            return Ok(None);
        };
        name.parse::<Tz>()
            .map(Some)
            .map_err(|_| CliError::invalid_input(format!("Unknown timezone in config: {}", name)).into())
    }

    /// Open the Day One store read-only.
    pub fn open_store(&self) -> anyhow::Result<DayOneSqlite> {
        let config = self.config()?;
        let path = resolve_database_path(self.cli, config)?;
        let opened = match resolve_media_dir(self.cli, config) {
            Some(media_dir) => DayOneSqlite::open_with_media_dir(&path, &media_dir),
            None => DayOneSqlite::open(&path),
        };
        match opened {
            Ok(store) => Ok(store),
            Err(DayOneError::DatabaseNotFound(path)) => {
                Err(CliError::not_found(missing_database_message(&path)).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
