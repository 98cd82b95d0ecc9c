//! Conversion of merged search results into a GeoJSON feature collection.

use crate::hash::record_id_hash;
use chrono::{DateTime, SecondsFormat};
use portalsearch_types::{Feature, FeatureCollection, FetchedItems, RawRecord, ID_FIELD};
use serde_json::{json, Value};
use tracing::debug;

/// Extent used for items that have none: `[[xmin, ymin], [xmax, ymax]]`.
pub const FALLBACK_EXTENT: [[f64; 2]; 2] = [[0.0, 0.0], [1.0, 1.0]];

/// Properties holding epoch milliseconds that are rewritten as ISO-8601.
pub const TIMESTAMP_FIELDS: [&str; 2] = ["created", "modified"];

/// Builds the response collection; `count` is the upstream total, not the
/// number of features.
pub fn assemble(fetched: FetchedItems) -> FeatureCollection {
    let features: Vec<Feature> = fetched.items.into_iter().map(format_feature).collect();
    debug!(features = features.len(), count = fetched.count, "assembled feature collection");
    FeatureCollection::new(features, fetched.count)
}

/// Turns one result record into a feature.
///
/// Items without a usable extent get the fallback extent in their properties
/// as well as in their geometry.
pub fn format_feature(mut properties: RawRecord) -> Feature {
    let parsed = properties.get("extent").and_then(parse_extent);
    let corners = match parsed {
        Some(corners) => corners,
        None => {
            properties.insert("extent".to_string(), json!([[0, 0], [1, 1]]));
            FALLBACK_EXTENT
        }
    };
    let geometry = polygon(corners);

    let hash = record_id_hash(properties.get("id"));
    properties.insert(ID_FIELD.to_string(), Value::from(hash));

    for field in TIMESTAMP_FIELDS {
        if let Some(value) = properties.get_mut(field) {
            if let Some(iso) = epoch_millis_to_iso(value) {
                *value = Value::String(iso);
            }
        }
    }

    Feature::new(properties, geometry)
}

/// Closed ring around an extent, counter-clockwise from the minimum corner.
pub fn extent_ring(extent: [[f64; 2]; 2]) -> Vec<Vec<f64>> {
    let [[xmin, ymin], [xmax, ymax]] = extent;
    vec![
        vec![xmin, ymin],
        vec![xmax, ymin],
        vec![xmax, ymax],
        vec![xmin, ymax],
        vec![xmin, ymin],
    ]
}

/// Polygon for a raw `extent` value, falling back to the unit square.
pub fn extent_geometry(extent: Option<&Value>) -> geojson::Geometry {
    polygon(extent.and_then(parse_extent).unwrap_or(FALLBACK_EXTENT))
}

fn polygon(corners: [[f64; 2]; 2]) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::Polygon(vec![extent_ring(corners)]))
}

fn parse_extent(value: &Value) -> Option<[[f64; 2]; 2]> {
    let corners = value.as_array()?;
    if corners.is_empty() {
        return None;
    }
    let corner = |i: usize| -> Option<[f64; 2]> {
        let pair = corners.get(i)?.as_array()?;
        Some([pair.first()?.as_f64()?, pair.get(1)?.as_f64()?])
    };
    match (corner(0), corner(1)) {
        (Some(min), Some(max)) => Some([min, max]),
        _ => {
            debug!(extent = %value, "malformed extent, using fallback");
            None
        }
    }
}

/// `2009-12-17T23:45:11.000Z` for numeric epoch milliseconds; `None` otherwise.
pub fn epoch_millis_to_iso(value: &Value) -> Option<String> {
    let millis = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64))?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis).map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
}
