//! Paginated retrieval of all results for one logical request.

use crate::client::PortalClient;
use crate::error::ProviderResult;
use futures::future::try_join_all;
use portalsearch_types::{FetchedItems, UpstreamQuery};
use tracing::{debug, info};

/// Number of page requests needed to cover `total` results.
pub fn total_batches(total: u64, max_page_size: u32) -> u64 {
    total.div_ceil(u64::from(max_page_size.max(1)))
}

/// Start offsets of every page request, first page included.
///
/// The first page always runs, so the schedule is never empty.
pub fn page_starts(first_start: u32, total: u64, max_page_size: u32) -> Vec<u32> {
    let batches = total_batches(total, max_page_size).max(1);
    let batches = u32::try_from(batches).unwrap_or(u32::MAX);
    (0..batches)
        .map(|k| first_start.saturating_add(k.saturating_mul(max_page_size)))
        .collect()
}

/// Fetches the first page, then the remaining pages concurrently.
///
/// Any failing page fails the whole call; pages still in flight are dropped.
/// Items keep page order whatever order the responses arrive in.
pub async fn fetch_all(
    client: &dyn PortalClient,
    query: &UpstreamQuery,
    max_page_size: u32,
) -> ProviderResult<FetchedItems> {
    let first = client.fetch_page(query).await?;
    let count = first.total;
    let starts = page_starts(query.start, count, max_page_size);

    if starts.len() <= 1 {
        debug!(count, items = first.results.len(), "single page result");
        return Ok(FetchedItems {
            items: first.results,
            count,
        });
    }

    let remaining: Vec<UpstreamQuery> = starts[1..]
        .iter()
        .map(|&start| query.at_page(start, max_page_size))
        .collect();
    info!(pages = starts.len(), total = count, "fetching remaining pages");
    debug!(?starts, "page schedule");

    let pages = try_join_all(remaining.iter().map(|page| client.fetch_page(page))).await?;

    let mut items = first.results;
    for page in pages {
        items.extend(page.results);
    }
    Ok(FetchedItems { items, count })
}
