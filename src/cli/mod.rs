//! CLI module
//!
//! Command-line interface for managing SSH keys.
//!
//! # Commands
//!
//! - `list` - List every key on the account
//! - `get` - Show one key by id or fingerprint
//! - `create` - Upload a public key given inline
//! - `import` - Upload a public key read from a file
//! - `update` - Rename a key
//! - `delete` - Remove a key

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
