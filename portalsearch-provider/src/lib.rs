//! Portal search provider.
//!
//! Answers a feature query by searching the portal, following every result
//! page, and returning the items as GeoJSON polygons of their extents.
//!
//! - [`SearchModel`] is the entry point (`get_data`)
//! - [`PortalClient`] abstracts the upstream; [`HttpPortalClient`] is the
//!   `reqwest` implementation
//! - [`fetch_all`] runs the page schedule, [`assemble`] builds the collection

pub mod assemble;
mod client;
mod config;
mod error;
pub mod fetch;
pub mod hash;
mod model;

pub use assemble::assemble;
pub use client::{HttpPortalClient, PortalClient};
pub use config::{ProviderConfig, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PORTAL_URL};
pub use error::{ProviderError, ProviderResult, GENERIC_ERROR_MESSAGE};
pub use fetch::{fetch_all, page_starts};
pub use hash::item_id_hash;
pub use model::SearchModel;
