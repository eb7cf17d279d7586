//! SSH key resource
//!
//! [`KeysService`] is the public entry point: it lists every key through the
//! pagination walker and dispatches single-key operations by [`KeyId`].
//! [`KeysApi`] is the transport seam, implemented over HTTP by
//! [`HttpKeysApi`].

mod api;
mod public_key;
mod service;
mod types;

pub use api::{HttpKeysApi, KeysApi, KEYS_PATH};
pub use public_key::{parse_authorized_key, AuthorizedKey};
pub use service::KeysService;
pub use types::{Key, KeyCreateRequest, KeyId, KeyUpdateRequest, SshKey};
