//! Wire serialization of upstream queries.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use portalsearch_types::UpstreamQuery;
use serde_json::Value;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one key or value the way the upstream expects.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Ordered `(name, value)` pairs of a query; absent optional parameters are
/// skipped. Non-string values are JSON-encoded.
pub fn query_pairs(query: &UpstreamQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("f", query.f.clone()),
        ("q", query.q.clone()),
        ("num", stringify(&Value::from(query.num))),
        ("start", stringify(&Value::from(query.start))),
    ];
    if let Some(field) = &query.sort_field {
        pairs.push(("sortField", field.clone()));
    }
    if let Some(order) = &query.sort_order {
        pairs.push(("sortOrder", order.clone()));
    }
    if let Some(bbox) = &query.bbox {
        pairs.push(("bbox", bbox.clone()));
    }
    pairs
}

/// Serializes a query as `name=value` pairs joined with `&`.
pub fn serialize_query_params(query: &UpstreamQuery) -> String {
    query_pairs(query)
        .into_iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
