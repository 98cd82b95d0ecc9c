//! Stable integer identifiers for search results.

use serde_json::Value;
use xxhash_rust::xxh32::xxh32;

/// Largest value an `itemIdHash` can take.
pub const MAX_ITEM_ID_HASH: u32 = i32::MAX as u32;

/// Maps an item id onto `0..=MAX_ITEM_ID_HASH`.
///
/// The 32-bit hash is scaled down so the result fits a signed 32-bit
/// integer field. Equal ids always map to equal values.
pub fn item_id_hash(id: &str) -> u32 {
    let hash = f64::from(xxh32(id.as_bytes(), 0));
    let scaled = (hash / f64::from(u32::MAX) * f64::from(MAX_ITEM_ID_HASH)).round();
    scaled as u32
}

/// Hashes the `id` property of a record; missing ids hash as the empty string.
pub fn record_id_hash(id: Option<&Value>) -> u32 {
    match id {
        Some(Value::String(s)) => item_id_hash(s),
        None | Some(Value::Null) => item_id_hash(""),
        Some(other) => item_id_hash(&other.to_string()),
    }
}
