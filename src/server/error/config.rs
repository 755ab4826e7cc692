use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be opened or read.
    ///
    /// Check `SETTINGS_PATH` (defaults to `settings.json` in the working directory).
    #[error("Failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a valid settings JSON object.
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required setting is missing or empty, both in the file and the environment.
    #[error("Missing required setting: {0}")]
    MissingValue(String),

    /// A numeric setting is out of range.
    #[error("Invalid value for setting {0}")]
    InvalidValue(String),

    /// A URL setting does not parse as an absolute URL.
    #[error("Invalid URL for setting {key}: {source}")]
    InvalidUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },
}
