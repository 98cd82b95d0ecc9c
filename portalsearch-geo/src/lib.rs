//! Spatial reference resolution for rectangle filters.
//!
//! Query rectangles arrive in whatever spatial reference the client map uses
//! (usually web mercator). The upstream search endpoint only understands
//! WGS84 longitude/latitude, so every rectangle goes through two steps:
//!
//! 1. [`resolve_wkid`] picks the input WKID from the geometry, the `inSR`
//!    hint, or the WGS84 default, and checks it against the supported set.
//! 2. [`to_wgs84`] reprojects both corners with `proj4rs`.
//!
//! An unsupported WKID is not an error at this level: callers receive
//! [`Resolution::Unsupported`] and decide to drop the filter.

mod envelope;
mod error;
mod project;
mod spatial_ref;

pub use envelope::Envelope;
pub use error::{GeoError, GeoResult};
pub use project::to_wgs84;
pub use spatial_ref::{
    canonical_wkid, is_supported, resolve_wkid, Resolution, LEGACY_WEB_MERCATOR_WKID,
    SUPPORTED_WKIDS, WEB_MERCATOR_WKID, WGS84_WKID,
};
