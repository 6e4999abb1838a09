//! Legacy `v1.0` token-exchange service implementation
//!
//! Provides a concrete implementation of `TokenAuthenticationService` for
//! the header-based auth protocol: GET the auth URL with `X-Auth-User` and
//! `X-Auth-Key`, read `X-Auth-Token` and `X-Storage-Url` from the response.

use crate::{AuthError, AuthResult, StorageSession, TokenAuthenticationService};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, instrument};

#[cfg(test)]
#[path = "token_auth_service_tests.rs"]
mod tests;

const AUTH_USER_HEADER: &str = "X-Auth-User";
const AUTH_KEY_HEADER: &str = "X-Auth-Key";
const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const STORAGE_URL_HEADER: &str = "x-storage-url";

/// Rackspace CloudFiles auth endpoint, US infrastructure.
pub const RACKSPACE_US_AUTH_URL: &str = "https://auth.api.rackspacecloud.com/v1.0";
/// Rackspace CloudFiles auth endpoint, UK infrastructure.
pub const RACKSPACE_UK_AUTH_URL: &str = "https://lon.auth.api.rackspacecloud.com/v1.0";

/// Legacy auth token-exchange service
///
/// Concrete implementation of `TokenAuthenticationService` for the `v1.0`
/// auth protocol shared by OpenStack Swift (TempAuth) and Rackspace
/// CloudFiles.
///
/// # Examples
///
/// ```rust,no_run
/// use secrecy::SecretString;
/// use swift_auth::{LegacyAuthService, TokenAuthenticationService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = LegacyAuthService::rackspace_us(
///     "my-account".to_string(),
///     SecretString::from("api-key".to_string()),
/// );
///
/// let session = service.authenticate().await?;
/// println!("storage url: {}", session.storage_url);
/// # Ok(())
/// # }
/// ```
pub struct LegacyAuthService {
    auth_url: String,
    username: String,
    api_key: SecretString,
    http: reqwest::Client,
}

impl LegacyAuthService {
    /// Create an auth service for an arbitrary `v1.0` auth endpoint
    ///
    /// # Parameters
    /// - `auth_url`: full URL of the auth endpoint, e.g. `https://swift.example.com/auth/v1.0`
    /// - `username`: account user name
    /// - `api_key`: account API key
    pub fn new(auth_url: String, username: String, api_key: SecretString) -> Self {
        Self {
            auth_url,
            username,
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// Create an auth service for the Rackspace US auth endpoint
    pub fn rackspace_us(username: String, api_key: SecretString) -> Self {
        Self::new(RACKSPACE_US_AUTH_URL.to_string(), username, api_key)
    }

    /// Create an auth service for the Rackspace UK auth endpoint
    pub fn rackspace_uk(username: String, api_key: SecretString) -> Self {
        Self::new(RACKSPACE_UK_AUTH_URL.to_string(), username, api_key)
    }
}

#[async_trait]
impl TokenAuthenticationService for LegacyAuthService {
    #[instrument(skip(self), fields(auth_url = %self.auth_url, username = %self.username))]
    async fn authenticate(&self) -> AuthResult<StorageSession> {
        let response = self
            .http
            .get(&self.auth_url)
            .header(AUTH_USER_HEADER, self.username.as_str())
            .header(AUTH_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            error!(username = %self.username, "Auth endpoint rejected credentials");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Token exchange failed");
            return Err(AuthError::ServiceError(format!(
                "status {}: {}",
                status.as_u16(),
                message
            )));
        }

        let token = read_header(&response, AUTH_TOKEN_HEADER)?;
        let storage_url = read_header(&response, STORAGE_URL_HEADER)?;

        info!(username = %self.username, "Obtained storage session");

        Ok(StorageSession {
            token: SecretString::from(token),
            storage_url,
        })
    }
}

fn read_header(response: &reqwest::Response, name: &'static str) -> AuthResult<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(AuthError::MissingHeader(name))
}

impl std::fmt::Debug for LegacyAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyAuthService")
            .field("auth_url", &self.auth_url)
            .field("username", &self.username)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}
