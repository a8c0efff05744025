use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::theme::ThemeConfig;

const APP_DIR: &str = "calendar-reminders";

/// Overrides the reminders file from the environment.
pub const REMINDERS_FILE_ENV: &str = "CALENDAR_REMINDERS_FILE";

/// Contents of `<config_dir>/calendar-reminders/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub reminders_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Config {
    /// Load the user config. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn reminders_path(&self) -> PathBuf {
        self.resolve_reminders_path(std::env::var_os(REMINDERS_FILE_ENV).map(PathBuf::from))
    }

    fn resolve_reminders_path(&self, env_override: Option<PathBuf>) -> PathBuf {
        env_override
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.reminders_file.clone())
            .or_else(|| data_path("reminders.json"))
            .unwrap_or_else(|| PathBuf::from("reminders.json"))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| data_path("calendar-reminders.log"))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

fn data_path(file: &str) -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR).join(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parses_paths_and_theme_table() {
        let config = Config::parse(
            r##"
reminders_file = "/tmp/notes/reminders.json"
log_file = "/tmp/notes/app.log"

[theme]
preset = "gruvbox"
marked_bg = "#e6f0fc"
"##,
        )
        .unwrap();

        assert_eq!(
            config.reminders_file.as_deref(),
            Some(Path::new("/tmp/notes/reminders.json"))
        );
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/notes/app.log")));
        assert_eq!(config.theme.preset.as_deref(), Some("gruvbox"));
        assert_eq!(config.theme.marked_bg.as_deref(), Some("#e6f0fc"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::parse("reminder_file = \"typo.json\"").is_err());
    }

    #[test]
    fn env_override_beats_config_file() {
        let config = Config {
            reminders_file: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_reminders_path(Some(PathBuf::from("from-env.json"))),
            PathBuf::from("from-env.json")
        );
        assert_eq!(
            config.resolve_reminders_path(Some(PathBuf::new())),
            PathBuf::from("from-config.json")
        );
        assert_eq!(
            config.resolve_reminders_path(None),
            PathBuf::from("from-config.json")
        );
    }

    #[test]
    fn default_reminders_file_is_json() {
        let path = Config::default().resolve_reminders_path(None);
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("reminders.json"));
    }

    #[test]
    fn reads_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\npreset = \"nord\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.theme.preset.as_deref(), Some("nord"));

        std::fs::write(&path, "[theme\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
