//! Configuration for the swiftctl CLI.
//!
//! The CLI is credential-driven and reads everything from the environment,
//! using the variable names the classic swift command-line client
//! established: `ST_AUTH` (auth endpoint URL), `ST_USER` and `ST_KEY`.
//! Alternatively `SWIFT_STORAGE_URL` plus `SWIFT_AUTH_TOKEN` supply a
//! ready-made session and skip the token exchange.

use secrecy::SecretString;
use swift_auth::{LegacyAuthService, StorageSession, TokenAuthenticationService};
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Auth endpoint URL variable.
pub const ENV_AUTH_URL: &str = "ST_AUTH";
/// Account user name variable.
pub const ENV_USERNAME: &str = "ST_USER";
/// Account API key variable.
pub const ENV_API_KEY: &str = "ST_KEY";
/// Pre-authenticated storage URL variable.
pub const ENV_STORAGE_URL: &str = "SWIFT_STORAGE_URL";
/// Pre-authenticated token variable.
pub const ENV_AUTH_TOKEN: &str = "SWIFT_AUTH_TOKEN";

/// Credentials and session material gathered from the environment.
#[derive(Debug)]
pub struct CliConfig {
    auth_url: Option<String>,
    username: Option<String>,
    api_key: Option<SecretString>,
    storage_url: Option<String>,
    token: Option<SecretString>,
}

impl CliConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            auth_url: lookup(ENV_AUTH_URL),
            username: lookup(ENV_USERNAME),
            api_key: lookup(ENV_API_KEY).map(SecretString::from),
            storage_url: lookup(ENV_STORAGE_URL),
            token: lookup(ENV_AUTH_TOKEN).map(SecretString::from),
        }
    }

    /// Turns the configuration into a storage session.
    ///
    /// A pre-authenticated session (`SWIFT_STORAGE_URL` + `SWIFT_AUTH_TOKEN`)
    /// is used as-is; otherwise a token exchange is performed against
    /// `ST_AUTH` with `ST_USER` / `ST_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when neither a full session nor complete
    /// exchange credentials are available, and `Error::Auth` when the token
    /// exchange itself fails.
    pub async fn resolve_session(self) -> Result<StorageSession, Error> {
        let Self {
            auth_url,
            username,
            api_key,
            storage_url,
            token,
        } = self;

        if let (Some(storage_url), Some(token)) = (storage_url.clone(), token) {
            debug!("Using pre-authenticated session from environment");
            return Ok(StorageSession { token, storage_url });
        }

        let auth_url = auth_url
            .ok_or_else(|| Error::Config(format!("{ENV_AUTH_URL} is not set")))?;
        let username = username
            .ok_or_else(|| Error::Config(format!("{ENV_USERNAME} is not set")))?;
        let api_key = api_key
            .ok_or_else(|| Error::Config(format!("{ENV_API_KEY} is not set")))?;

        let service = LegacyAuthService::new(auth_url, username, api_key);
        let session = service.authenticate().await?;
        Ok(session)
    }
}
