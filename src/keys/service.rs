//! SSH key operations

use super::api::KeysApi;
use super::types::{KeyCreateRequest, KeyId, KeyUpdateRequest, SshKey};
use crate::error::Result;
use crate::pagination::{paginate_with, DEFAULT_PER_PAGE};

/// List, get, create, update and delete SSH keys
///
/// Holds the injected [`KeysApi`] handle and no other state, so one service
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct KeysService<A> {
    api: A,
    per_page: u32,
}

impl<A: KeysApi> KeysService<A> {
    /// Create a service over the given transport
    pub fn new(api: A) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the page size used by [`list`](Self::list)
    #[must_use]
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Get the underlying transport
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Page size used by [`list`](Self::list)
    pub fn page_size(&self) -> u32 {
        self.per_page
    }

    /// List every key on the account, in provider order
    pub async fn list(&self) -> Result<Vec<SshKey>> {
        let api = &self.api;
        let keys = paginate_with(self.per_page, move |request| api.list(request)).await?;
        Ok(keys.into_iter().map(SshKey::from).collect())
    }

    /// Get a key by numeric id or fingerprint
    pub async fn get(&self, id: &str) -> Result<SshKey> {
        self.get_key(&KeyId::parse(id)?).await
    }

    /// Get a key by an already classified id
    pub async fn get_key(&self, id: &KeyId) -> Result<SshKey> {
        let key = match id {
            KeyId::Numeric(id) => self.api.get_by_id(*id).await?,
            KeyId::Fingerprint(fingerprint) => self.api.get_by_fingerprint(fingerprint).await?,
        };
        Ok(key.into())
    }

    /// Create a key; the provider validates the request
    pub async fn create(&self, request: &KeyCreateRequest) -> Result<SshKey> {
        Ok(self.api.create(request).await?.into())
    }

    /// Update a key by numeric id or fingerprint
    pub async fn update(&self, id: &str, request: &KeyUpdateRequest) -> Result<SshKey> {
        self.update_key(&KeyId::parse(id)?, request).await
    }

    /// Update a key by an already classified id
    pub async fn update_key(&self, id: &KeyId, request: &KeyUpdateRequest) -> Result<SshKey> {
        let key = match id {
            KeyId::Numeric(id) => self.api.update_by_id(*id, request).await?,
            KeyId::Fingerprint(fingerprint) => {
                self.api.update_by_fingerprint(fingerprint, request).await?
            }
        };
        Ok(key.into())
    }

    /// Delete a key by numeric id or fingerprint
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.delete_key(&KeyId::parse(id)?).await
    }

    /// Delete a key by an already classified id
    pub async fn delete_key(&self, id: &KeyId) -> Result<()> {
        match id {
            KeyId::Numeric(id) => self.api.delete_by_id(*id).await,
            KeyId::Fingerprint(fingerprint) => self.api.delete_by_fingerprint(fingerprint).await,
        }
    }
}
