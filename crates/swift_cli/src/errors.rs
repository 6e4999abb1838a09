use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the swiftctl CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Token exchange with the auth endpoint failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] swift_auth::AuthError),

    /// Required configuration is missing or unusable.
    ///
    /// Returned when the environment does not provide enough information to
    /// open a storage session (e.g. `ST_AUTH` without `ST_USER`).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a local file for upload.
    #[error("Failed to load file: {0}")]
    LoadFile(#[source] io::Error),

    /// Failed to write a downloaded object to disk.
    #[error("Failed to save file: {0}")]
    SaveFile(#[source] io::Error),

    /// A storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] swift_client::Error),
}
