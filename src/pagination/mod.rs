//! Pagination module
//!
//! Walks a provider's page-numbered, link-signalled collections.
//!
//! # Overview
//!
//! A resource API supplies a fetch callback that performs one page request.
//! [`paginate`] drives that callback from page 1 onward, following the
//! `links.pages.next` indicator in each response, and flattens every page
//! into a single ordered `Vec`. The walker is generic over the item type so
//! any paginated resource can reuse it.

mod engine;
mod types;

pub use engine::{paginate, paginate_with};
pub use types::{Links, Meta, Page, PageRequest, Pages, DEFAULT_PER_PAGE, FIRST_PAGE};
