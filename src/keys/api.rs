//! Transport for the SSH key resource

use super::types::{Key, KeyCreateRequest, KeyUpdateRequest};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{Links, Meta, Page, PageRequest};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

/// Collection path of the key resource, relative to the API base URL
pub const KEYS_PATH: &str = "v2/account/keys";

/// Remote operations on SSH keys
///
/// Single-key operations come in two flavours, addressed by numeric id or by
/// fingerprint. Errors are returned exactly as the transport produced them.
#[async_trait]
pub trait KeysApi: Send + Sync {
    /// Fetch one page of keys
    async fn list(&self, request: PageRequest) -> Result<Page<Key>>;

    async fn get_by_id(&self, id: u64) -> Result<Key>;

    async fn get_by_fingerprint(&self, fingerprint: &str) -> Result<Key>;

    async fn create(&self, request: &KeyCreateRequest) -> Result<Key>;

    async fn update_by_id(&self, id: u64, request: &KeyUpdateRequest) -> Result<Key>;

    async fn update_by_fingerprint(
        &self,
        fingerprint: &str,
        request: &KeyUpdateRequest,
    ) -> Result<Key>;

    async fn delete_by_id(&self, id: u64) -> Result<()>;

    async fn delete_by_fingerprint(&self, fingerprint: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct KeysRoot {
    ssh_keys: Vec<Key>,
    #[serde(default)]
    links: Links,
    #[serde(default)]
    meta: Meta,
}

#[derive(Debug, Deserialize)]
struct KeyRoot {
    ssh_key: Key,
}

/// [`KeysApi`] over the provider's REST endpoints
#[derive(Debug, Clone)]
pub struct HttpKeysApi {
    client: Arc<HttpClient>,
}

impl HttpKeysApi {
    /// Create an API bound to a shared client handle
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get the shared client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Path of a single key; the segment is percent-encoded
    fn key_path(segment: impl std::fmt::Display) -> Result<String> {
        let mut url = Url::parse("http://localhost/")?;
        url.path_segments_mut()
            .map_err(|()| Error::Other("cannot build key path".to_string()))?
            .pop_if_empty()
            .extend(KEYS_PATH.split('/'))
            .push(&segment.to_string());
        Ok(url.path().to_string())
    }

    async fn get_key(&self, path: &str) -> Result<Key> {
        let root: KeyRoot = self.client.get_json(path).await?;
        Ok(root.ssh_key)
    }

    async fn put_key(&self, path: &str, request: &KeyUpdateRequest) -> Result<Key> {
        let response = self.client.put(path, serde_json::to_value(request)?).await?;
        let root: KeyRoot = response.json().await?;
        Ok(root.ssh_key)
    }

    async fn delete_key(&self, path: &str) -> Result<()> {
        self.client.delete(path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeysApi for HttpKeysApi {
    async fn list(&self, request: PageRequest) -> Result<Page<Key>> {
        let root: KeysRoot = self
            .client
            .request_json(Method::GET, KEYS_PATH, request.request_config())
            .await?;

        Ok(Page {
            items: root.ssh_keys,
            links: root.links,
            meta: root.meta,
        })
    }

    async fn get_by_id(&self, id: u64) -> Result<Key> {
        self.get_key(&Self::key_path(id)?).await
    }

    async fn get_by_fingerprint(&self, fingerprint: &str) -> Result<Key> {
        self.get_key(&Self::key_path(fingerprint)?).await
    }

    async fn create(&self, request: &KeyCreateRequest) -> Result<Key> {
        let response = self
            .client
            .post(KEYS_PATH, serde_json::to_value(request)?)
            .await?;
        let root: KeyRoot = response.json().await?;
        Ok(root.ssh_key)
    }

    async fn update_by_id(&self, id: u64, request: &KeyUpdateRequest) -> Result<Key> {
        self.put_key(&Self::key_path(id)?, request).await
    }

    async fn update_by_fingerprint(
        &self,
        fingerprint: &str,
        request: &KeyUpdateRequest,
    ) -> Result<Key> {
        self.put_key(&Self::key_path(fingerprint)?, request).await
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        self.delete_key(&Self::key_path(id)?).await
    }

    async fn delete_by_fingerprint(&self, fingerprint: &str) -> Result<()> {
        self.delete_key(&Self::key_path(fingerprint)?).await
    }
}
