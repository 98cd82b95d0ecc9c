//! Request validation and upstream query translation.
//!
//! Converts a GeoServices-style feature query into the query vocabulary of
//! the portal search endpoint:
//! - [`validate_request_query`] schema-checks the raw query bag
//! - [`build_upstream_query`] rewrites the filter, applies paging and sort,
//!   and reprojects the rectangle filter into a `bbox`
//! - [`serialize_query_params`] renders the wire query string
//!
//! # Example
//!
//! ```
//! use portalsearch_query::{build_upstream_query, serialize_query_params, validate_request_query, BuildOptions};
//!
//! let raw = serde_json::json!({ "where": "typekeywords = 'hubSite'" });
//! let request = validate_request_query(raw.as_object().unwrap()).unwrap();
//! let outcome = build_upstream_query(&request, &BuildOptions::default()).unwrap();
//!
//! assert_eq!(
//!     serialize_query_params(&outcome.query),
//!     "f=json&q=typekeywords%3A%22hubSite%22&num=100&start=1"
//! );
//! ```

mod builder;
mod error;
pub mod filter;
mod serialize;
pub mod sort;
mod validate;

pub use builder::{build_upstream_query, BuildOptions, BuildOutcome, DEFAULT_PAGE_SIZE};
pub use error::{QueryError, QueryResult};
pub use filter::rewrite_where;
pub use serialize::{encode_component, query_pairs, serialize_query_params};
pub use sort::{validate_sort, SortSpec, VALID_SORT_FIELDS, VALID_SORT_ORDERS};
pub use validate::{parse_geometry, validate_request_query};
