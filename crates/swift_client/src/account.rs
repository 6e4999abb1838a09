//! Account domain types.
//!
//! Swift reports account-level state exclusively through response headers on
//! a `HEAD /` request; there is no JSON body to parse.

use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;

const CONTAINER_COUNT_HEADER: &str = "x-account-container-count";
const BYTES_USED_HEADER: &str = "x-account-bytes-used";

/// Aggregate usage information for a storage account.
///
/// Parsed from the `X-Account-Container-Count` and `X-Account-Bytes-Used`
/// response headers of an account `HEAD` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    /// Number of containers owned by the account.
    pub container_count: u64,
    /// Total bytes stored across all containers.
    pub bytes_used: u64,
}

impl AccountMetadata {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            container_count: read_u64_header(headers, CONTAINER_COUNT_HEADER)?,
            bytes_used: read_u64_header(headers, BYTES_USED_HEADER)?,
        })
    }
}

fn read_u64_header(headers: &HeaderMap, name: &'static str) -> Result<u64, Error> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .ok_or(Error::InvalidHeader(name))
}
