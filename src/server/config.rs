//! Bot settings loaded from `settings.json`.
//!
//! The settings file is a flat JSON object:
//!
//! ```json
//! {
//!     "karthuria_api_url": "https://karth.top/api",
//!     "karthuria_cdn_url": "https://cdn.karth.top/api/assets",
//!     "prefixes": ["!kuro ", "k!"],
//!     "commands": ["birthday", "event", "configuration", "love"],
//!     "token": "...",
//!     "servers_path": "servers.json",
//!     "reminder_interval_hours": 24
//! }
//! ```
//!
//! Only `karthuria_api_url` and the token are required. The token may instead come from
//! the `DISCORD_BOT_TOKEN` environment variable, which takes precedence over the file.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const SETTINGS_PATH_VAR: &str = "SETTINGS_PATH";
const DEFAULT_SETTINGS_PATH: &str = "settings.json";
const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

const DEFAULT_CDN_URL: &str = "https://cdn.karth.top/api/assets";
const DEFAULT_SERVERS_PATH: &str = "servers.json";
const DEFAULT_REMINDER_INTERVAL_HOURS: u64 = 24;

/// Command modules that can be enabled in the settings file.
///
/// The dotted module paths used by earlier deployments are accepted as aliases so old
/// settings files keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandModule {
    #[serde(alias = "command.birthday.birthday")]
    Birthday,
    #[serde(alias = "command.event.event")]
    Event,
    #[serde(alias = "command.configuration.configuration")]
    Configuration,
    #[serde(alias = "command.love.love")]
    Love,
}

impl CommandModule {
    pub const ALL: [CommandModule; 4] = [
        CommandModule::Birthday,
        CommandModule::Event,
        CommandModule::Configuration,
        CommandModule::Love,
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub karthuria_api_url: String,

    #[serde(default = "default_cdn_url")]
    pub karthuria_cdn_url: String,

    #[serde(default)]
    pub prefixes: Vec<String>,

    #[serde(default = "default_commands")]
    pub commands: Vec<CommandModule>,

    #[serde(default)]
    pub token: String,

    #[serde(default = "default_servers_path")]
    pub servers_path: PathBuf,

    #[serde(default = "default_reminder_interval_hours")]
    pub reminder_interval_hours: u64,
}

fn default_cdn_url() -> String {
    DEFAULT_CDN_URL.to_string()
}

fn default_commands() -> Vec<CommandModule> {
    CommandModule::ALL.to_vec()
}

fn default_servers_path() -> PathBuf {
    PathBuf::from(DEFAULT_SERVERS_PATH)
}

fn default_reminder_interval_hours() -> u64 {
    DEFAULT_REMINDER_INTERVAL_HOURS
}

impl Config {
    /// Loads settings from `SETTINGS_PATH` (or `settings.json`) and the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated settings
    /// - `Err(AppError::ConfigErr)` - File unreadable or invalid, token missing, or a URL
    ///   setting is malformed
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var(SETTINGS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));

        let mut config = Self::from_file(&path)?;

        if let Ok(token) = std::env::var(TOKEN_VAR) {
            if !token.trim().is_empty() {
                config.token = token;
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Parses a settings file without consulting the environment or validating.
    ///
    /// # Arguments
    /// - `path` - Location of the settings JSON file
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Checks required values and URL formats.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingValue("token".to_string()).into());
        }

        self.reminder_interval()?;

        for (key, value) in [
            ("karthuria_api_url", &self.karthuria_api_url),
            ("karthuria_cdn_url", &self.karthuria_cdn_url),
        ] {
            Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
                key: key.to_string(),
                source,
            })?;
        }

        Ok(())
    }

    /// Time between two reminder ticks.
    ///
    /// # Returns
    /// - `Ok(Duration)` - A non-zero interval
    /// - `Err(AppError::ConfigErr(InvalidValue))` - Zero hours, or too many hours to count
    ///   in seconds
    pub fn reminder_interval(&self) -> Result<Duration, AppError> {
        self.reminder_interval_hours
            .checked_mul(60 * 60)
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::InvalidValue("reminder_interval_hours".to_string()).into())
    }

    pub fn is_enabled(&self, module: CommandModule) -> bool {
        self.commands.contains(&module)
    }

    /// Upstream API base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.karthuria_api_url.trim_end_matches('/')
    }

    /// CDN base URL without a trailing slash.
    pub fn cdn_url(&self) -> &str {
        self.karthuria_cdn_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Config {
        Config::from_json(r#"{"karthuria_api_url": "https://karth.top/api", "token": "abc"}"#)
            .unwrap()
    }

    /// Only the API URL is needed in the file; everything else has a default.
    #[test]
    fn applies_defaults() {
        let config = minimal();

        assert_eq!(config.karthuria_cdn_url, DEFAULT_CDN_URL);
        assert_eq!(config.servers_path, PathBuf::from("servers.json"));
        assert_eq!(config.reminder_interval_hours, 24);
        assert!(config.prefixes.is_empty());
        assert_eq!(config.commands, CommandModule::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    /// Module lists written for the original bot still parse.
    #[test]
    fn accepts_dotted_module_aliases() {
        let config = Config::from_json(
            r#"{
                "karthuria_api_url": "https://karth.top/api",
                "commands": ["command.birthday.birthday", "event"]
            }"#,
        )
        .unwrap();

        assert!(config.is_enabled(CommandModule::Birthday));
        assert!(config.is_enabled(CommandModule::Event));
        assert!(!config.is_enabled(CommandModule::Love));
    }

    #[test]
    fn rejects_missing_token() {
        let mut config = minimal();
        config.token = "  ".to_string();

        let result = config.validate();

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingValue(_)))
        ));
    }

    #[test]
    fn rejects_relative_api_url() {
        let mut config = minimal();
        config.karthuria_api_url = "karth.top/api".to_string();

        let result = config.validate();

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidUrl { .. }))
        ));
    }

    #[test]
    fn rejects_zero_reminder_interval() {
        let mut config = minimal();
        config.reminder_interval_hours = 0;

        let result = config.validate();

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidValue(_)))
        ));
    }

    #[test]
    fn rejects_overflowing_reminder_interval() {
        let mut config = minimal();
        config.reminder_interval_hours = u64::MAX / 60;

        assert!(matches!(
            config.reminder_interval(),
            Err(AppError::ConfigErr(ConfigError::InvalidValue(_)))
        ));
        assert!(config.validate().is_err());

        config.reminder_interval_hours = 24;
        assert_eq!(
            config.reminder_interval().unwrap(),
            Duration::from_secs(86_400)
        );
    }

    #[test]
    fn trims_trailing_slashes() {
        let mut config = minimal();
        config.karthuria_api_url = "https://karth.top/api/".to_string();

        assert_eq!(config.api_url(), "https://karth.top/api");
    }

    #[test]
    fn reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join("missing.json"));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::Read { .. }))
        ));
    }
}
