//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by fallible operations across the data,
//! service, scheduler, and bot layers. Most variants wrap a library error via `#[from]` so
//! `?` works at every call site. Domain-specific errors (`ConfigError`, `InternalError`)
//! live in their own modules and are wrapped transparently.
//!
//! Note that most runtime failures never reach the user as an `AppError`: upstream and
//! local-file failures are degraded to empty results at the repository and store
//! boundaries and only logged.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings file could not be read, parsed, or validated.
    ///
    /// Only raised during startup; the bot refuses to start without valid settings.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected data or a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client request error from reqwest.
    ///
    /// Covers transport failures, non-2xx statuses (via `error_for_status`), and response
    /// bodies that fail to decode.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JSON (de)serialization error for local files.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Filesystem error reading or writing local files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
