//! Core type definitions for portalsearch.
//!
//! This crate defines the data model shared by the query translator, the
//! paginated fetcher and the feature assembler:
//! - Inbound GeoServices-style queries, raw and validated
//! - The upstream search query and the pages it returns
//! - GeoJSON features and the feature collection envelope
//! - The fixed field dictionary advertised in layer metadata
//!
//! Nothing in here performs I/O.

mod feature;
mod fields;
mod page;
mod query;

pub use feature::{
    Feature, FeatureCollection, FiltersApplied, LayerMetadata, GEOMETRY_TYPE, ID_FIELD,
};
pub use fields::{FieldDefinition, FieldType, FIELD_DICTIONARY};
pub use page::{FetchedItems, RawRecord, UpstreamPage};
pub use query::{
    GeometryFilter, GeometryType, InboundQuery, RequestQuery, SpatialReferenceHint,
    UpstreamQuery, WGS84_WKID,
};
