//! Pagination types
//!
//! Request cursor and response metadata shared by every paginated resource.

use crate::http::RequestConfig;
use serde::{Deserialize, Serialize};

/// Number of the first page
pub const FIRST_PAGE: u32 = 1;

/// Page size used when the caller does not pick one
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Cursor for a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PER_PAGE)
    }
}

impl PageRequest {
    /// Request for the first page with the given size
    pub fn first(per_page: u32) -> Self {
        Self {
            page: FIRST_PAGE,
            per_page,
        }
    }

    /// Request for the following page; the page size is unchanged
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            per_page: self.per_page,
        }
    }

    /// Query parameters for this page
    pub fn request_config(&self) -> RequestConfig {
        RequestConfig::new()
            .query("page", self.page.to_string())
            .query("per_page", self.per_page.to_string())
    }
}

/// Page navigation URLs reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// The `links` object of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

impl Links {
    /// Links pointing at a following page
    pub fn with_next(url: impl Into<String>) -> Self {
        Self {
            pages: Some(Pages {
                next: Some(url.into()),
                ..Pages::default()
            }),
        }
    }

    /// Check whether the provider advertised another page
    ///
    /// Missing `links`, missing `pages` and an empty `next` all mean the
    /// current page is the last one.
    pub fn has_next(&self) -> bool {
        self.pages
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .is_some_and(|next| !next.is_empty())
    }
}

/// The `meta` object of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// One fetched page of items plus its continuation metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub links: Links,
    pub meta: Meta,
}

impl<T> Page<T> {
    /// A page with no following page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            links: Links::default(),
            meta: Meta::default(),
        }
    }

    /// A page followed by another one at `next`
    pub fn with_next(items: Vec<T>, next: impl Into<String>) -> Self {
        Self {
            items,
            links: Links::with_next(next),
            meta: Meta::default(),
        }
    }

    /// Attach provider metadata
    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Check whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.links.has_next()
    }
}
