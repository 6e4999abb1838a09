//! Crate for interacting with Swift-protocol object storage REST APIs.
//!
//! This crate provides explicit client objects for OpenStack Swift and
//! Rackspace CloudFiles: one async method per HTTP operation, a plain
//! request builder underneath, and a small status-code-to-result mapping
//! per operation. Statuses the API treats as ordinary outcomes (404 on
//! lookups and deletes, 409 on a non-empty container delete) become values
//! rather than errors.
//!
//! Clients are constructed from a storage URL and an auth token; obtaining
//! those is the job of the `swift_auth` crate. Every request the client
//! issues carries the token in the `X-Auth-Token` header.

use async_trait::async_trait;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use http::StatusCode;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod account;
pub mod container;
pub mod encoding;
pub mod object;

pub use account::AccountMetadata;
pub use container::{ContainerInfo, ListContainerOptions};
pub use encoding::KeyEncoding;
pub use object::{ObjectMetadata, ObjectPayload, StorageObject, OBJECT_META_PREFIX};

use encoding::{encode_key, encode_segment};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Header carrying the auth token on every request.
const X_AUTH_TOKEN: &str = "X-Auth-Token";

/// Trait for object-storage operations (account, container and object
/// level).
///
/// Implemented by [`SwiftClient`] and [`CloudFilesClient`]; business logic
/// should depend on this trait so tests can substitute a mock storage
/// backend.
#[async_trait]
pub trait ObjectStorageClient: Send + Sync {
    /// Fetches account-level usage counters.
    ///
    /// Issues `HEAD /` and parses the account headers from the response.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHeader` if the service response lacks the
    /// account headers, or `Error::AuthFailed` if the token was rejected.
    async fn get_account_metadata(&self) -> Result<AccountMetadata, Error>;

    /// Lists containers owned by the account.
    ///
    /// Issues `GET /?format=json`, forwarding any paging options. A 204
    /// response yields an empty listing.
    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ContainerInfo>, Error>;

    /// Creates a container.
    ///
    /// Returns `Ok(true)` when the container was created (201) or already
    /// existed (202). Ordinary client-error responses yield `Ok(false)`
    /// rather than an error.
    async fn create_container(&self, container: &str) -> Result<bool, Error>;

    /// Deletes a container if it holds no objects.
    ///
    /// Returns `Ok(true)` on 204. A missing container (404) and a
    /// non-empty container (409) both yield `Ok(false)`.
    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, Error>;

    /// Uploads an object and returns the ETag the service computed.
    ///
    /// Sends the payload body with `Content-Type`, `Content-Length` and one
    /// `X-Object-Meta-*` header per metadata entry. When the payload
    /// carries an ETag hint the service verifies the received bytes
    /// against it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the container does not exist and
    /// `Error::IntegrityCheckFailed` if the service rejects the upload
    /// with 422.
    async fn put_object(&self, container: &str, object: &ObjectPayload) -> Result<String, Error>;

    /// Fetches object attributes without the content.
    ///
    /// Returns `Ok(None)` when the object does not exist.
    async fn head_object(&self, container: &str, key: &str)
        -> Result<Option<ObjectMetadata>, Error>;

    /// Downloads an object.
    ///
    /// Returns `Ok(None)` when the object does not exist.
    async fn get_object(&self, container: &str, key: &str)
        -> Result<Option<StorageObject>, Error>;

    /// Replaces the user metadata of an object.
    ///
    /// Returns `Ok(true)` only when the service acknowledges with 202.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the object does not exist.
    async fn set_object_metadata(
        &self,
        container: &str,
        key: &str,
        metadata: &std::collections::HashMap<String, String>,
    ) -> Result<bool, Error>;

    /// Deletes an object.
    ///
    /// Returns `Ok(true)` on 204 and `Ok(false)` when the object was
    /// already gone (404).
    async fn delete_object(&self, container: &str, key: &str) -> Result<bool, Error>;
}

/// A client for an OpenStack Swift storage endpoint.
///
/// Holds the account storage URL and the auth token, and attaches the
/// token to every request. Construct it from the session produced by the
/// auth service.
#[derive(Debug)]
pub struct SwiftClient {
    storage_url: String,
    token: SecretString,
    key_encoding: KeyEncoding,
    http: reqwest::Client,
}

impl SwiftClient {
    /// Creates a client for the given storage URL and token.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEndpoint` if the URL does not parse or is
    /// not `http`/`https`.
    pub fn new(storage_url: &str, token: SecretString) -> Result<Self, Error> {
        Self::with_key_encoding(storage_url, token, KeyEncoding::Swift)
    }

    pub(crate) fn with_key_encoding(
        storage_url: &str,
        token: SecretString,
        key_encoding: KeyEncoding,
    ) -> Result<Self, Error> {
        let parsed =
            Url::parse(storage_url).map_err(|e| Error::InvalidEndpoint(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            storage_url: storage_url.trim_end_matches('/').to_string(),
            token,
            key_encoding,
            http: reqwest::Client::new(),
        })
    }

    /// The account storage URL this client talks to.
    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }

    fn container_url(&self, container: &str) -> String {
        format!("{}/{}", self.storage_url, encode_segment(container))
    }

    fn object_url(&self, container: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.storage_url,
            encode_segment(container),
            encode_key(key, self.key_encoding)
        )
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(X_AUTH_TOKEN, self.token.expose_secret())
    }

    #[instrument(skip(self))]
    async fn account_metadata(&self) -> Result<AccountMetadata, Error> {
        let response = self.request(Method::HEAD, &self.storage_url).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        if status.is_success() {
            AccountMetadata::from_headers(response.headers())
        } else {
            Err(unexpected(response).await)
        }
    }

    #[instrument(skip(self, options))]
    async fn containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ContainerInfo>, Error> {
        let mut query: Vec<(&str, String)> = vec![("format", "json".to_string())];
        query.extend(options.query_pairs());

        let response = self
            .request(Method::GET, &self.storage_url)
            .query(&query)
            .send()
            .await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::NO_CONTENT => Ok(Vec::new()),
            s if s.is_success() => {
                let body = response.bytes().await?;
                let listing: Vec<ContainerInfo> = serde_json::from_slice(&body)?;
                debug!(count = listing.len(), "Listed containers");
                Ok(listing)
            }
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self), fields(container = %container))]
    async fn put_container(&self, container: &str) -> Result<bool, Error> {
        let url = self.container_url(container);
        let response = self
            .request(Method::PUT, &url)
            .header(CONTENT_LENGTH, 0)
            .send()
            .await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::CREATED | StatusCode::ACCEPTED => {
                info!(container = container, "Created container");
                Ok(true)
            }
            s if s.is_client_error() => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self), fields(container = %container))]
    async fn delete_container(&self, container: &str) -> Result<bool, Error> {
        let url = self.container_url(container);
        let response = self.request(Method::DELETE, &url).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::NO_CONTENT => {
                info!(container = container, "Deleted container");
                Ok(true)
            }
            // Missing and non-empty containers are ordinary outcomes.
            StatusCode::NOT_FOUND | StatusCode::CONFLICT => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self, object), fields(container = %container, key = %object.key))]
    async fn upload_object(
        &self,
        container: &str,
        object: &ObjectPayload,
    ) -> Result<String, Error> {
        let url = self.object_url(container, &object.key);

        let mut request = self
            .request(Method::PUT, &url)
            .header(CONTENT_LENGTH, object.body.len());
        if let Some(content_type) = &object.content_type {
            request = request.header(CONTENT_TYPE, content_type.as_str());
        }
        if let Some(etag) = &object.etag {
            request = request.header(ETAG, etag.as_str());
        }
        for (name, value) in &object.metadata {
            request = request.header(format!("{}{}", OBJECT_META_PREFIX, name), value.as_str());
        }

        let response = request.body(object.body.clone()).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::CREATED => {
                let etag = response
                    .headers()
                    .get(ETAG)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.trim_matches('"').to_string())
                    .ok_or(Error::InvalidHeader("etag"))?;
                info!(
                    container = container,
                    key = %object.key,
                    etag = %etag,
                    "Uploaded object"
                );
                Ok(etag)
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            StatusCode::UNPROCESSABLE_ENTITY => Err(Error::IntegrityCheckFailed),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self), fields(container = %container, key = %key))]
    async fn object_metadata(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<ObjectMetadata>, Error> {
        let url = self.object_url(container, key);
        let response = self.request(Method::HEAD, &url).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(ObjectMetadata::from_headers(response.headers()))),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self), fields(container = %container, key = %key))]
    async fn download_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<StorageObject>, Error> {
        let url = self.object_url(container, key);
        let response = self.request(Method::GET, &url).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let metadata = ObjectMetadata::from_headers(response.headers());
                let body = response.bytes().await?;
                debug!(
                    container = container,
                    key = key,
                    bytes = body.len(),
                    "Downloaded object"
                );
                Ok(Some(StorageObject { metadata, body }))
            }
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self, metadata), fields(container = %container, key = %key))]
    async fn post_object_metadata(
        &self,
        container: &str,
        key: &str,
        metadata: &std::collections::HashMap<String, String>,
    ) -> Result<bool, Error> {
        let url = self.object_url(container, key);

        let mut request = self
            .request(Method::POST, &url)
            .header(CONTENT_LENGTH, 0);
        for (name, value) in metadata {
            request = request.header(format!("{}{}", OBJECT_META_PREFIX, name), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::ACCEPTED => {
                info!(container = container, key = key, "Replaced object metadata");
                Ok(true)
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            s if s.is_success() => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self), fields(container = %container, key = %key))]
    async fn remove_object(&self, container: &str, key: &str) -> Result<bool, Error> {
        let url = self.object_url(container, key);
        let response = self.request(Method::DELETE, &url).send().await?;
        let status = response.status();
        ensure_authorized(status)?;

        match status {
            StatusCode::NO_CONTENT => {
                info!(container = container, key = key, "Deleted object");
                Ok(true)
            }
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }
}

#[async_trait]
impl ObjectStorageClient for SwiftClient {
    async fn get_account_metadata(&self) -> Result<AccountMetadata, Error> {
        self.account_metadata().await
    }

    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ContainerInfo>, Error> {
        self.containers(options).await
    }

    async fn create_container(&self, container: &str) -> Result<bool, Error> {
        self.put_container(container).await
    }

    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, Error> {
        self.delete_container(container).await
    }

    async fn put_object(&self, container: &str, object: &ObjectPayload) -> Result<String, Error> {
        self.upload_object(container, object).await
    }

    async fn head_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<ObjectMetadata>, Error> {
        self.object_metadata(container, key).await
    }

    async fn get_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<StorageObject>, Error> {
        self.download_object(container, key).await
    }

    async fn set_object_metadata(
        &self,
        container: &str,
        key: &str,
        metadata: &std::collections::HashMap<String, String>,
    ) -> Result<bool, Error> {
        self.post_object_metadata(container, key, metadata).await
    }

    async fn delete_object(&self, container: &str, key: &str) -> Result<bool, Error> {
        self.remove_object(container, key).await
    }
}

/// A client for Rackspace CloudFiles.
///
/// CloudFiles speaks the same wire protocol as Swift; the one observable
/// difference is that `=` is percent-encoded in object keys, where Swift
/// leaves it literal. Authentication endpoints for the Rackspace regions
/// live in the `swift_auth` crate.
#[derive(Debug)]
pub struct CloudFilesClient {
    inner: SwiftClient,
}

impl CloudFilesClient {
    /// Creates a CloudFiles client for the given storage URL and token.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEndpoint` if the URL does not parse or is
    /// not `http`/`https`.
    pub fn new(storage_url: &str, token: SecretString) -> Result<Self, Error> {
        Ok(Self {
            inner: SwiftClient::with_key_encoding(storage_url, token, KeyEncoding::CloudFiles)?,
        })
    }

    /// The account storage URL this client talks to.
    pub fn storage_url(&self) -> &str {
        self.inner.storage_url()
    }
}

#[async_trait]
impl ObjectStorageClient for CloudFilesClient {
    async fn get_account_metadata(&self) -> Result<AccountMetadata, Error> {
        self.inner.account_metadata().await
    }

    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ContainerInfo>, Error> {
        self.inner.containers(options).await
    }

    async fn create_container(&self, container: &str) -> Result<bool, Error> {
        self.inner.put_container(container).await
    }

    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, Error> {
        self.inner.delete_container(container).await
    }

    async fn put_object(&self, container: &str, object: &ObjectPayload) -> Result<String, Error> {
        self.inner.upload_object(container, object).await
    }

    async fn head_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<ObjectMetadata>, Error> {
        self.inner.object_metadata(container, key).await
    }

    async fn get_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<StorageObject>, Error> {
        self.inner.download_object(container, key).await
    }

    async fn set_object_metadata(
        &self,
        container: &str,
        key: &str,
        metadata: &std::collections::HashMap<String, String>,
    ) -> Result<bool, Error> {
        self.inner.post_object_metadata(container, key, metadata).await
    }

    async fn delete_object(&self, container: &str, key: &str) -> Result<bool, Error> {
        self.inner.remove_object(container, key).await
    }
}

fn ensure_authorized(status: StatusCode) -> Result<(), Error> {
    if status == StatusCode::UNAUTHORIZED {
        error!("Storage service rejected the auth token");
        return Err(Error::AuthFailed(
            "the storage service rejected the auth token".to_string(),
        ));
    }
    Ok(())
}

async fn unexpected(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    error!(status = status, "Storage request failed unexpectedly");
    Error::UnexpectedStatus { status, message }
}
