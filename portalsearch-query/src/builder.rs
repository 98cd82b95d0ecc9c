//! Translation of a validated query into the upstream query template.

use crate::error::{QueryError, QueryResult};
use crate::filter::rewrite_where;
use crate::sort::SortSpec;
use portalsearch_geo::{resolve_wkid, to_wgs84, Envelope, Resolution};
use portalsearch_types::{GeometryFilter, InboundQuery, UpstreamQuery};
use tracing::{debug, warn};

/// Page size requested when the caller does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Options that come from provider configuration rather than the request.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub default_page_size: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A built template plus the non-fatal problems met while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub query: UpstreamQuery,
    pub warnings: Vec<String>,
}

/// Builds the pre-pagination upstream query for a validated request.
pub fn build_upstream_query(
    request: &InboundQuery,
    options: &BuildOptions,
) -> QueryResult<BuildOutcome> {
    let mut warnings = Vec::new();

    let mut query = UpstreamQuery::new(
        rewrite_where(request.where_clause.as_deref()),
        request.result_record_count.unwrap_or(options.default_page_size),
        request.result_offset.unwrap_or(1),
    );

    if let Some(order_by) = &request.order_by {
        let sort = SortSpec::parse(order_by);
        query.sort_field = Some(sort.field);
        query.sort_order = Some(sort.order);
    }

    if let Some(geometry) = request.envelope_filter() {
        let hint = request.in_sr.as_ref().and_then(|sr| sr.wkid());
        match bbox_for(geometry, hint)? {
            Ok(bbox) => query.bbox = Some(bbox),
            Err(wkid) => {
                warn!(wkid, "unsupported wkid provided, dropping bbox filter");
                warnings.push(format!("unsupported wkid {wkid} provided"));
            }
        }
    }

    debug!(?query, "built upstream query");
    Ok(BuildOutcome { query, warnings })
}

/// Resolves and reprojects a rectangle. The inner `Err` carries an
/// unsupported WKID, which drops the filter instead of failing the request.
fn bbox_for(geometry: &GeometryFilter, hint: Option<u32>) -> QueryResult<Result<String, u32>> {
    match resolve_wkid(geometry.embedded_wkid(), hint) {
        Resolution::Supported(wkid) => {
            let envelope = to_wgs84(Envelope::from_bounds(geometry.bounds()), wkid).map_err(|e| {
                if e.is_invalid_input() {
                    QueryError::validation(format!("\"geometry\" {e}"))
                } else {
                    QueryError::from(e)
                }
            })?;
            Ok(Ok(envelope.to_bbox_param()))
        }
        Resolution::Unsupported(wkid) => Ok(Err(wkid)),
    }
}
