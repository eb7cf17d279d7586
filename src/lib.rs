// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # keyctl
//!
//! SSH key management for cloud provider accounts.
//!
//! ## Features
//!
//! - **Key Operations**: list, get, create, update and delete account SSH keys
//! - **Id or Fingerprint**: single-key operations accept either identifier
//! - **Generic Pagination**: walk any link-paginated collection into one `Vec`
//! - **Key Import**: validate OpenSSH public key files before uploading
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keyctl::{ClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::default()
//!         .with_access_token(std::env::var("DIGITALOCEAN_ACCESS_TOKEN").ok());
//!     let keys = config.build_keys_service()?;
//!
//!     for key in keys.list().await? {
//!         println!("{} {} {}", key.id, key.name, key.fingerprint);
//!     }
//!
//!     keys.delete("3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      KeysService                          │
//! │  list()  get(id)  create(req)  update(id, req)  delete(id)│
//! └───────────────────────────────────────────────────────────┘
//!          │ paginate(fetch)              │ KeyId dispatch
//! ┌────────┴────────┐            ┌────────┴────────┐
//! │   Pagination    │            │  KeysApi trait  │
//! │ page 1, 2, ...  │──fetch────▶│  HttpKeysApi    │
//! └─────────────────┘            └────────┬────────┘
//!                                ┌────────┴────────┐
//!                                │   HttpClient    │
//!                                │  Bearer auth    │
//!                                └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document request/response fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Link-based pagination
pub mod pagination;

/// SSH key resource
pub mod keys;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use keys::{HttpKeysApi, KeyCreateRequest, KeyId, KeyUpdateRequest, KeysApi, KeysService, SshKey};
pub use pagination::{paginate, paginate_with, Page, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
