//! Inbound and upstream query types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WKID of WGS84 geographic coordinates, the only output spatial reference.
pub const WGS84_WKID: u32 = 4326;

/// The inbound query exactly as received: an untyped JSON object.
///
/// Unknown keys (`outFields`, `returnGeometry`, `spatialRel`, ...) are
/// carried along and ignored by validation.
pub type RequestQuery = serde_json::Map<String, serde_json::Value>;

/// Geometry kind named by the `geometryType` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryType {
    /// `esriGeometryEnvelope`: an axis-aligned bounding rectangle.
    Envelope,
    /// Any other kind. Carried for logging, never used as a filter.
    Other(String),
}

impl GeometryType {
    /// Wire name of the rectangle kind.
    pub const ENVELOPE: &'static str = "esriGeometryEnvelope";

    /// Maps a wire name onto a geometry kind.
    pub fn parse(name: &str) -> Self {
        if name == Self::ENVELOPE {
            Self::Envelope
        } else {
            Self::Other(name.to_string())
        }
    }

    /// Returns true for the rectangle kind.
    #[must_use]
    pub fn is_envelope(&self) -> bool {
        matches!(self, Self::Envelope)
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope => f.write_str(Self::ENVELOPE),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Spatial reference supplied through `inSR`.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialReferenceHint {
    Wkid(u32),
    /// A WKT definition. Carries no WKID, so resolution falls through to the default.
    Wkt(String),
}

impl SpatialReferenceHint {
    pub fn wkid(&self) -> Option<u32> {
        match self {
            Self::Wkid(wkid) => Some(*wkid),
            Self::Wkt(_) => None,
        }
    }
}

/// A rectangle filter after shape validation, still in its input spatial reference.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryFilter {
    /// `{xmin, ymin, xmax, ymax, spatialReference: {wkid}}`
    Envelope {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        wkid: Option<u32>,
    },
    /// `[xmin, ymin, xmax, ymax]`, from an array or a comma separated string.
    Bounds([f64; 4]),
}

impl GeometryFilter {
    /// WKID embedded in the geometry itself, if any.
    pub fn embedded_wkid(&self) -> Option<u32> {
        match self {
            Self::Envelope { wkid, .. } => *wkid,
            Self::Bounds(_) => None,
        }
    }

    /// Corner coordinates as `[xmin, ymin, xmax, ymax]`.
    pub fn bounds(&self) -> [f64; 4] {
        match self {
            Self::Envelope {
                xmin,
                ymin,
                xmax,
                ymax,
                ..
            } => [*xmin, *ymin, *xmax, *ymax],
            Self::Bounds(bounds) => *bounds,
        }
    }
}

/// A validated inbound query. Immutable once built by the validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundQuery {
    pub where_clause: Option<String>,
    pub result_record_count: Option<u32>,
    pub result_offset: Option<u32>,
    pub num: Option<u32>,
    pub in_sr: Option<SpatialReferenceHint>,
    pub out_sr: Option<u32>,
    /// Raw sort spec, `"field"` or `"field DIRECTION"`.
    pub order_by: Option<String>,
    pub geometry: Option<GeometryFilter>,
    pub geometry_type: Option<GeometryType>,
}

impl InboundQuery {
    /// The rectangle filter, present only when the geometry kind is the envelope kind.
    pub fn envelope_filter(&self) -> Option<&GeometryFilter> {
        match &self.geometry_type {
            Some(kind) if kind.is_envelope() => self.geometry.as_ref(),
            _ => None,
        }
    }
}

/// Query sent to the upstream search endpoint.
///
/// One value per HTTP call. Pages of one logical request share every field
/// except `start` (and `num` after the first page); each page gets its own
/// copy through [`UpstreamQuery::at_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamQuery {
    pub f: String,
    pub q: String,
    pub num: u32,
    /// 1-based offset of the first record.
    pub start: u32,
    #[serde(rename = "sortField", default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(rename = "sortOrder", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<String>,
}

impl UpstreamQuery {
    /// Creates a JSON-format query with no sort and no bbox.
    pub fn new(q: impl Into<String>, num: u32, start: u32) -> Self {
        Self {
            f: "json".to_string(),
            q: q.into(),
            num,
            start,
            sort_field: None,
            sort_order: None,
            bbox: None,
        }
    }

    /// Returns an independent copy positioned at another page.
    #[must_use]
    pub fn at_page(&self, start: u32, num: u32) -> Self {
        Self {
            start,
            num,
            ..self.clone()
        }
    }
}
