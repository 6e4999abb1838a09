//! Shared test double for command handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use swift_client::{
    AccountMetadata, ContainerInfo, Error, ListContainerOptions, ObjectMetadata,
    ObjectPayload, ObjectStorageClient, StorageObject,
};

/// A canned-response storage backend that records every call it receives.
pub struct MockStorage {
    pub calls: Mutex<Vec<String>>,
    pub listing: Vec<ContainerInfo>,
    pub object: Option<StorageObject>,
    pub object_metadata: Option<ObjectMetadata>,
    pub create_result: bool,
    pub delete_result: bool,
    pub metadata_accepted: bool,
}

impl Default for MockStorage {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            listing: Vec::new(),
            object: None,
            object_metadata: None,
            create_result: true,
            delete_result: true,
            metadata_accepted: true,
        }
    }
}

impl MockStorage {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorageClient for MockStorage {
    async fn get_account_metadata(&self) -> Result<AccountMetadata, Error> {
        self.record("get_account_metadata".to_string());
        Ok(AccountMetadata {
            container_count: 3,
            bytes_used: 323479,
        })
    }

    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ContainerInfo>, Error> {
        self.record(format!("list_containers limit={:?}", options.limit));
        Ok(self.listing.clone())
    }

    async fn create_container(&self, container: &str) -> Result<bool, Error> {
        self.record(format!("create_container {container}"));
        Ok(self.create_result)
    }

    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, Error> {
        self.record(format!("delete_container_if_empty {container}"));
        Ok(self.delete_result)
    }

    async fn put_object(&self, container: &str, object: &ObjectPayload) -> Result<String, Error> {
        self.record(format!("put_object {container}/{}", object.key));
        Ok("5e6b5b70b0426b1cc1968003e1afa5ad".to_string())
    }

    async fn head_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<ObjectMetadata>, Error> {
        self.record(format!("head_object {container}/{key}"));
        Ok(self.object_metadata.clone())
    }

    async fn get_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<StorageObject>, Error> {
        self.record(format!("get_object {container}/{key}"));
        Ok(self.object.clone())
    }

    async fn set_object_metadata(
        &self,
        container: &str,
        key: &str,
        metadata: &HashMap<String, String>,
    ) -> Result<bool, Error> {
        self.record(format!(
            "set_object_metadata {container}/{key} entries={}",
            metadata.len()
        ));
        Ok(self.metadata_accepted)
    }

    async fn delete_object(&self, container: &str, key: &str) -> Result<bool, Error> {
        self.record(format!("delete_object {container}/{key}"));
        Ok(self.delete_result)
    }
}
