use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dayone_core::storage::DEFAULT_DATABASE_RELATIVE_PATH;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DayOneConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub attachments: AttachmentsSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AttachmentsSection {
    pub media_dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub timezone: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(DEFAULT_DATABASE_RELATIVE_PATH))
}

pub fn read_config(path: &Path) -> anyhow::Result<DayOneConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dayone"));
        }
    }
    Ok(home_dir()?.join(".config").join("dayone"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: DayOneConfig = toml::from_str(
            r#"
            [database]
            path = "/tmp/DayOne.sqlite"

            [attachments]
            media_dir = "/tmp/media"

            [ui]
            timezone = "America/Chicago"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path.as_deref(), Some("/tmp/DayOne.sqlite"));
        assert_eq!(config.attachments.media_dir.as_deref(), Some("/tmp/media"));
        assert_eq!(config.ui.timezone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config: DayOneConfig = toml::from_str("[ui]\ntimezone = \"UTC\"\n").unwrap();
        assert!(config.database.path.is_none());
        assert!(config.attachments.media_dir.is_none());
    }

    #[test]
    fn test_read_config_reports_path() {
        let err = read_config(Path::new("/nonexistent/dayone/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dayone/config.toml"));
    }
}
