//! Object domain types.
//!
//! Swift describes objects through response headers: system attributes use
//! standard HTTP headers (`Content-Length`, `ETag`, `Last-Modified`) while
//! user metadata travels as `X-Object-Meta-*` headers. These types carry
//! both directions of that mapping.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG, LAST_MODIFIED};
use http::HeaderMap;

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;

/// Header prefix that marks user-defined object metadata.
pub const OBJECT_META_PREFIX: &str = "x-object-meta-";

/// Attributes of a stored object, parsed from response headers.
///
/// Returned by `head_object` and carried inside [`StorageObject`] for
/// `get_object`. Fields the service did not report are `None`; user
/// metadata keys are lowercased, with the `x-object-meta-` prefix removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Object size in bytes.
    pub content_length: Option<u64>,
    /// MIME type recorded for the object.
    pub content_type: Option<String>,
    /// Content hash the service computed at upload time.
    pub etag: Option<String>,
    /// Last modification instant, from the `Last-Modified` header.
    pub last_modified: Option<DateTime<Utc>>,
    /// User-defined metadata entries.
    pub metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let mut metadata = HashMap::new();
        for (name, value) in headers {
            if let Some(key) = name.as_str().strip_prefix(OBJECT_META_PREFIX) {
                if let Ok(value) = value.to_str() {
                    metadata.insert(key.to_string(), value.to_string());
                }
            }
        }

        Self {
            content_length: headers
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok()),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            etag: headers
                .get(ETAG)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim_matches('"').to_string()),
            last_modified: headers
                .get(LAST_MODIFIED)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
                .map(|v| v.with_timezone(&Utc)),
            metadata,
        }
    }
}

/// A downloaded object: its metadata together with the content bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    /// Attributes parsed from the response headers.
    pub metadata: ObjectMetadata,
    /// Object content.
    pub body: Bytes,
}

/// An object to upload.
///
/// The key names the object within its container and may contain `/` to
/// form pseudo-directories. `content_type` and `metadata` become request
/// headers; `etag` is an optional hex MD5 hint the service verifies the
/// received bytes against.
///
/// # Examples
///
/// ```rust
/// use swift_client::ObjectPayload;
///
/// let mut payload = ObjectPayload::new("reports/2009/q1.csv", "a,b,c\n");
/// payload.content_type = Some("text/csv".to_string());
/// payload
///     .metadata
///     .insert("origin".to_string(), "nightly-export".to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPayload {
    /// Object key within the container.
    pub key: String,
    /// Content to upload.
    pub body: Bytes,
    /// MIME type to record, sent as `Content-Type`.
    pub content_type: Option<String>,
    /// Hex MD5 of the body, sent as `ETag` for service-side verification.
    pub etag: Option<String>,
    /// User-defined metadata, sent as `X-Object-Meta-*` headers.
    pub metadata: HashMap<String, String>,
}

impl ObjectPayload {
    /// Creates a payload with the given key and body and no optional
    /// attributes.
    pub fn new(key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}
