use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or read/write a file in it.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode a servers file.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
