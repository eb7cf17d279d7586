//! Page walker
//!
//! Drives a fetch callback across every page of a collection.

use super::types::{Page, PageRequest, DEFAULT_PER_PAGE};
use crate::error::Result;
use std::future::Future;
use tracing::debug;

/// Fetch every page with the default page size
///
/// See [`paginate_with`].
pub async fn paginate<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    paginate_with(DEFAULT_PER_PAGE, fetch).await
}

/// Fetch every page of a collection and flatten the items
///
/// Starts at page 1 and requests pages strictly in order, one at a time,
/// until a response carries no `next` link. Items keep provider order:
/// all items of page 1, then page 2, and so on. Nothing is deduplicated.
///
/// The first failing fetch aborts the walk and its error is returned
/// unchanged; items gathered from earlier pages are discarded.
///
/// There is no upper bound on the number of pages. A callback that keeps
/// reporting a next page never terminates, so callers wrapping a
/// misbehaving provider must bound it themselves (for example with
/// `tokio::time::timeout`).
pub async fn paginate_with<T, F, Fut>(per_page: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut request = PageRequest::first(per_page);
    let mut items = Vec::new();

    loop {
        let page = fetch(request).await?;
        let has_next = page.has_next();

        debug!(
            "Fetched page {} ({} items, total {:?}, next: {})",
            request.page,
            page.items.len(),
            page.meta.total,
            has_next
        );

        items.extend(page.items);

        if !has_next {
            return Ok(items);
        }
        request = request.next();
    }
}
