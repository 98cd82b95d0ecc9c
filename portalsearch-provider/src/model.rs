//! The `getData` entry point.

use crate::assemble::assemble;
use crate::client::{HttpPortalClient, PortalClient};
use crate::config::ProviderConfig;
use crate::error::ProviderResult;
use crate::fetch::fetch_all;
use portalsearch_query::{build_upstream_query, validate_request_query, BuildOptions};
use portalsearch_types::{FeatureCollection, RequestQuery};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Serves feature queries from the portal search endpoint.
///
/// Holds no per-request state; one instance can serve concurrent calls.
#[derive(Clone)]
pub struct SearchModel {
    config: ProviderConfig,
    client: Arc<dyn PortalClient>,
}

impl SearchModel {
    /// Creates a model talking to the configured portal over HTTP.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let client = HttpPortalClient::new(&config)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Creates a model using the given portal client.
    pub fn with_client(config: ProviderConfig, client: Arc<dyn PortalClient>) -> Self {
        Self { config, client }
    }

    /// Validates, translates, fetches every page and assembles the result.
    ///
    /// Validation failures return before any upstream request is made.
    #[instrument(skip_all)]
    pub async fn get_data(&self, request: &RequestQuery) -> ProviderResult<FeatureCollection> {
        let inbound = validate_request_query(request)?;
        let options = BuildOptions {
            default_page_size: self.config.default_page_size,
        };
        let outcome = build_upstream_query(&inbound, &options)?;
        for warning in &outcome.warnings {
            warn!(%warning, "query degraded");
        }

        let fetched = fetch_all(
            self.client.as_ref(),
            &outcome.query,
            self.config.effective_max_page_size(),
        )
        .await?;
        info!(items = fetched.items.len(), total = fetched.count, "search complete");

        Ok(assemble(fetched))
    }

    /// Runs [`get_data`](Self::get_data) and hands the outcome to `callback`
    /// exactly once.
    pub async fn get_data_with<F>(&self, request: &RequestQuery, callback: F)
    where
        F: FnOnce(ProviderResult<FeatureCollection>),
    {
        let result = self.get_data(request).await;
        if let Err(e) = &result {
            warn!(status = e.status_code(), error = %e, "getData failed");
        }
        callback(result);
    }
}
