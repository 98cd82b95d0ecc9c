//! Provider configuration.

use portalsearch_query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public ArcGIS Online search endpoint.
pub const DEFAULT_PORTAL_URL: &str = "https://www.arcgis.com/sharing/rest/search";

/// Upper bound the portal places on `num`.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Settings for talking to the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Search endpoint, without a query string.
    pub portal_url: String,
    /// Page size used for every page after the first; also the batch divisor.
    pub max_page_size: u32,
    /// `num` sent when the request does not carry `resultRecordCount`.
    pub default_page_size: u32,
    pub user_agent: String,
    /// Transport timeout of the HTTP client, in seconds.
    pub request_timeout_secs: u64,
    /// Log each outgoing page URL at debug level.
    pub log_requests: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            user_agent: concat!("portalsearch/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 60,
            log_requests: true,
        }
    }
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Page size used for batching, never zero.
    pub(crate) fn effective_max_page_size(&self) -> u32 {
        self.max_page_size.max(1)
    }
}
