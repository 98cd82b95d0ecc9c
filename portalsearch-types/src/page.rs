//! Upstream search response types.

use serde::{Deserialize, Serialize};

/// One result record as returned by the upstream: an opaque property bag.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A single page of upstream search results.
///
/// Extra response keys (`query`, `nextStart`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPage {
    pub total: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub num: u64,
    #[serde(default)]
    pub results: Vec<RawRecord>,
}

/// Results of all pages of one logical request, merged in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedItems {
    pub items: Vec<RawRecord>,
    /// Total reported by the first page.
    pub count: u64,
}
