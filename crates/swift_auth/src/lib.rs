//! Authentication services for Swift-protocol object storage
//!
//! This crate turns account credentials into a storage session (auth token
//! plus account storage URL) by talking to the legacy `v1.0` auth endpoint
//! that OpenStack Swift and Rackspace CloudFiles expose.
//!
//! ## Architecture
//!
//! This crate defines an interface trait that infrastructure implements:
//! - Business logic depends on the trait
//! - The concrete service performs the HTTP token exchange
//! - The application wires the resulting session into a storage client

use async_trait::async_trait;
use secrecy::SecretString;

mod token_auth_service;

pub use token_auth_service::{
    LegacyAuthService, RACKSPACE_UK_AUTH_URL, RACKSPACE_US_AUTH_URL,
};

/// Result type for authentication operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during token-exchange operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The auth endpoint rejected the supplied username/key pair (401/403).
    #[error("Invalid credentials provided")]
    InvalidCredentials,

    /// The auth response omitted a header the session needs.
    #[error("Auth response header {0} is missing")]
    MissingHeader(&'static str),

    /// The auth endpoint answered with an unexpected status.
    #[error("Auth service error: {0}")]
    ServiceError(String),

    /// The token-exchange request could not be completed.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// An authenticated storage session.
///
/// Produced by a successful token exchange; pass `storage_url` and `token`
/// to a `swift_client` client constructor. The token is held in a
/// `SecretString` so it is redacted from debug output.
#[derive(Debug)]
pub struct StorageSession {
    /// Token to attach to every storage request.
    pub token: SecretString,
    /// Account storage URL the token is valid for.
    pub storage_url: String,
}

/// Token authentication service interface
///
/// Exchanges stored credentials for a [`StorageSession`]. Implementations
/// must be shareable across tasks.
#[async_trait]
pub trait TokenAuthenticationService: Send + Sync {
    /// Performs the token exchange.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the endpoint rejects the
    /// credentials and `AuthError::MissingHeader` if the response lacks the
    /// token or storage-URL header.
    async fn authenticate(&self) -> AuthResult<StorageSession>;
}
