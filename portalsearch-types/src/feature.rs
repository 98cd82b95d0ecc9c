//! GeoJSON feature collection returned to the caller.

use crate::fields::{FieldDefinition, FIELD_DICTIONARY};
use crate::page::RawRecord;
use serde::Serialize;

/// Geometry type of every emitted feature.
pub const GEOMETRY_TYPE: &str = "Polygon";

/// Name of the derived integer identifier field.
pub const ID_FIELD: &str = "itemIdHash";

/// One normalized search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: RawRecord,
    pub geometry: geojson::Geometry,
}

impl Feature {
    pub fn new(properties: RawRecord, geometry: geojson::Geometry) -> Self {
        Self {
            kind: "Feature",
            properties,
            geometry,
        }
    }
}

/// Fixed layer description attached to every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub display_field: &'static str,
    pub fields: &'static [FieldDefinition],
    pub geometry_type: &'static str,
    pub id_field: &'static str,
}

impl Default for LayerMetadata {
    fn default() -> Self {
        Self {
            name: "ArcGIS Search",
            description: "Search content in ArcGIS Online",
            display_field: "title",
            fields: FIELD_DICTIONARY,
            geometry_type: GEOMETRY_TYPE,
            id_field: ID_FIELD,
        }
    }
}

/// Filters the provider has already applied, so the host does not reapply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiltersApplied {
    #[serde(rename = "where")]
    pub where_clause: bool,
}

/// Response envelope for one logical request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
    /// Upstream-reported total across all pages.
    pub count: u64,
    pub metadata: LayerMetadata,
    pub filters_applied: FiltersApplied,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>, count: u64) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
            count,
            metadata: LayerMetadata::default(),
            filters_applied: FiltersApplied { where_clause: true },
        }
    }
}
