//! Error types for Swift storage client operations.
//!
//! This module defines the error types that can occur when talking to a
//! Swift-protocol storage service (OpenStack Swift or Rackspace CloudFiles).
//! Statuses the API treats as ordinary outcomes (404 on lookups, 409 on a
//! non-empty container delete) are mapped to values by the client and never
//! surface here.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during storage client operations.
///
/// Each variant carries enough context to distinguish a rejected request
/// from a transport failure or a malformed service response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service rejected the request token.
    ///
    /// This error occurs when a request receives a 401 response, typically
    /// because the auth token expired or was revoked. Re-authenticate and
    /// build a new client with the fresh token.
    #[error("Storage request was not authorized: {0}")]
    AuthFailed(String),

    /// Error deserializing a JSON response from the service.
    ///
    /// This error occurs when a listing response cannot be parsed into the
    /// expected structure, which usually indicates an API version change or
    /// a truncated response body.
    #[error("Failed to deserialize storage response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The object upload failed the service-side integrity check.
    ///
    /// Returned when the service answers 422 because the uploaded bytes do
    /// not match the ETag hint supplied with the request.
    #[error("Object integrity check failed")]
    IntegrityCheckFailed,

    /// The configured storage endpoint is not a usable HTTP(S) URL.
    #[error("Invalid storage endpoint: {0}")]
    InvalidEndpoint(String),

    /// A response header required by the operation was missing or malformed.
    ///
    /// The contained name is the (lowercased) header that could not be read,
    /// e.g. `x-account-container-count` or `etag`.
    #[error("Response header {0} is missing or malformed")]
    InvalidHeader(&'static str),

    /// The requested resource was not found.
    ///
    /// Only raised for operations where a 404 cannot be folded into the
    /// return value, such as uploading into a container that does not exist.
    #[error("Resource not found")]
    NotFound,

    /// The HTTP request could not be completed.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status the operation does not map.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, if any could be read.
        message: String,
    },
}
