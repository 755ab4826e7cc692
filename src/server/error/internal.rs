use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// The upstream API ships some numeric ids as strings (dress and equip card ids).
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert a Unix timestamp into a UTC datetime
    ///
    /// Occurs when the upstream API returns a timestamp outside chrono's range.
    #[error("Failed to convert Unix timestamp {timestamp} to a UTC datetime")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
    },
}
