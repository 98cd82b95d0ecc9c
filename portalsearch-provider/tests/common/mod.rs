#![allow(dead_code)]

use portalsearch_provider::ProviderConfig;
use portalsearch_types::RequestQuery;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/sharing/rest/search";

/// Config pointing at the mock portal.
pub fn mock_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        portal_url: format!("{}{}", server.uri(), SEARCH_PATH),
        request_timeout_secs: 5,
        ..Default::default()
    }
}

pub fn request(value: Value) -> RequestQuery {
    value.as_object().cloned().unwrap_or_default()
}

/// A portal item shaped like the real search results.
pub fn item(n: u64) -> Value {
    json!({
        "id": format!("{n:032x}"),
        "owner": "esri",
        "created": 1261093511000_i64 + n as i64,
        "modified": 1496777287000_i64,
        "title": format!("Item {n}"),
        "type": "Hub Site Application",
        "typeKeywords": ["hubSite"],
        "extent": [[-118.0, 32.0], [-116.0, 34.0]],
        "numViews": n
    })
}

/// Body of one search page; `start` is 1-based.
pub fn page_body(total: u64, start: u64, num: u64) -> Value {
    let end = (start + num).min(total + 1);
    let results: Vec<Value> = (start..end).map(item).collect();
    json!({
        "query": "*",
        "total": total,
        "start": start,
        "num": results.len(),
        "nextStart": if end > total { -1 } else { end as i64 },
        "results": results
    })
}
