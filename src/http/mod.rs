//! HTTP client module
//!
//! Provides the transport used by resource APIs: base URL joining, default
//! headers, bearer authentication and classification of error responses.
//!
//! Every call issues exactly one request. There is no retry, backoff or
//! rate limiting at this layer.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
