//! CLI commands and argument parsing

use crate::config::ACCESS_TOKEN_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage the SSH keys of a cloud account
#[derive(Parser, Debug)]
#[command(name = "keyctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API access token
    #[arg(short = 't', long, global = true, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub access_token: Option<String>,

    /// API base URL
    #[arg(short = 'u', long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Omit the header row in pretty output
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all SSH keys on the account
    #[command(alias = "ls")]
    List,

    /// Show an SSH key
    Get {
        /// Key id or fingerprint
        id: String,
    },

    /// Create an SSH key from an inline public key
    Create {
        /// Key name
        #[arg(long)]
        name: String,

        /// Public key in authorized_keys format
        #[arg(long)]
        public_key: String,
    },

    /// Create an SSH key from a public key file
    Import {
        /// Key name (defaults to the key comment)
        #[arg(long)]
        name: Option<String>,

        /// Path to the public key file
        #[arg(long)]
        public_key_file: PathBuf,
    },

    /// Rename an SSH key
    Update {
        /// Key id or fingerprint
        id: String,

        /// New key name
        #[arg(long)]
        name: String,
    },

    /// Delete an SSH key
    #[command(alias = "rm")]
    Delete {
        /// Key id or fingerprint
        id: String,

        /// Delete without asking for confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable table
    Pretty,
}
