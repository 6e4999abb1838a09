//! Container domain types.
//!
//! This module contains the JSON listing shape returned by
//! `GET /?format=json` and the paging options the listing accepts.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;

/// A container entry from an account listing.
///
/// # Examples
///
/// ```rust
/// use swift_client::ContainerInfo;
///
/// let info = ContainerInfo {
///     name: "backups".to_string(),
///     count: 12,
///     bytes: 4096,
/// };
/// assert_eq!(info.name, "backups");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Container name.
    pub name: String,
    /// Number of objects in the container.
    pub count: u64,
    /// Total bytes stored in the container.
    pub bytes: u64,
}

/// Paging options for an account container listing.
///
/// All fields are optional; `Default::default()` requests the full first
/// page the service is willing to return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContainerOptions {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Return only entries sorting after this name.
    pub marker: Option<String>,
    /// Return only entries whose name starts with this prefix.
    pub prefix: Option<String>,
}

impl ListContainerOptions {
    /// Returns the query pairs this option set contributes to the request.
    ///
    /// The `format=json` pair is owned by the client and is not produced
    /// here.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(marker) = &self.marker {
            pairs.push(("marker", marker.clone()));
        }
        if let Some(prefix) = &self.prefix {
            pairs.push(("prefix", prefix.clone()));
        }
        pairs
    }
}
