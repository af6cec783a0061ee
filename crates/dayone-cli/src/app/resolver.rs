//! Path resolution for config, database and attachment files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_database_path, read_config, DayOneConfig};

/// Resolve the config file path, checking DAYONE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DAYONE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config() -> anyhow::Result<DayOneConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DayOneConfig::default());
    }
    read_config(&path)
}

/// Resolve the database path: flag or env, then config, then the app's default location.
pub fn resolve_database_path(cli: &Cli, config: &DayOneConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = non_blank(cli.database.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = non_blank(config.database.path.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    default_database_path()
}

/// Resolve an explicit media directory, if one was configured.
///
/// `None` means attachments are looked up next to the database.
pub fn resolve_media_dir(cli: &Cli, config: &DayOneConfig) -> Option<PathBuf> {
    non_blank(cli.media_dir.as_deref())
        .or_else(|| non_blank(config.attachments.media_dir.as_deref()))
        .map(PathBuf::from)
}

/// Error message when the database file is missing.
pub fn missing_database_message(path: &Path) -> String {
    format!(
        "Day One database not found at {}\n\nIs Day One installed? Or point at a copy:\n  dayone --database /path/to/DayOne.sqlite recent\n  DAYONE_DATABASE=/path/to/DayOne.sqlite dayone recent",
        path.display()
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
