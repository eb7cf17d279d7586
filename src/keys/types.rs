//! SSH key types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// An SSH key record as stored by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Provider-assigned numeric id
    pub id: u64,
    /// Human-readable name
    pub name: String,
    /// Key fingerprint (e.g. `3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa`)
    pub fingerprint: String,
    /// Public key in `authorized_keys` format
    pub public_key: String,
}

/// Public representation of an SSH key returned by [`KeysService`](super::KeysService)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SshKey {
    key: Key,
}

impl SshKey {
    /// Wrap a provider key
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    /// Unwrap the provider key
    pub fn into_inner(self) -> Key {
        self.key
    }
}

impl From<Key> for SshKey {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl Deref for SshKey {
    type Target = Key;

    fn deref(&self) -> &Key {
        &self.key
    }
}

/// Request body for creating a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCreateRequest {
    pub name: String,
    pub public_key: String,
}

impl KeyCreateRequest {
    pub fn new(name: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_key: public_key.into(),
        }
    }
}

/// Request body for renaming a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyUpdateRequest {
    pub name: String,
}

impl KeyUpdateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Identity of a key: numeric id or fingerprint
///
/// User input is classified once: a string that parses as a positive integer
/// is a numeric id and any other non-empty string is a fingerprint. An empty
/// string is rejected with [`Error::MissingKeyId`]; zero and negative
/// integers with [`Error::InvalidKeyId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyId {
    Numeric(u64),
    Fingerprint(String),
}

impl KeyId {
    /// Classify a user-supplied identifier
    pub fn parse(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::MissingKeyId);
        }
        match id.parse::<i64>() {
            Ok(numeric) if numeric >= 1 => Ok(Self::Numeric(numeric as u64)),
            Ok(_) => Err(Error::InvalidKeyId { id: id.to_string() }),
            Err(_) => Ok(Self::Fingerprint(id.to_string())),
        }
    }

    /// Check if this is a numeric id
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl FromStr for KeyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for KeyId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Fingerprint(fingerprint) => f.write_str(fingerprint),
        }
    }
}
