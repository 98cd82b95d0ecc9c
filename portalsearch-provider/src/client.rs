//! HTTP access to the portal search endpoint.

use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use portalsearch_query::serialize_query_params;
use portalsearch_types::{UpstreamPage, UpstreamQuery};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Fetches one page of search results.
#[async_trait]
pub trait PortalClient: Send + Sync {
    async fn fetch_page(&self, query: &UpstreamQuery) -> ProviderResult<UpstreamPage>;
}

/// Error document the portal returns with a 200 status.
#[derive(Debug, Deserialize)]
struct PortalErrorBody {
    error: PortalErrorDetail,
}

#[derive(Debug, Deserialize)]
struct PortalErrorDetail {
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

/// [`PortalClient`] backed by `reqwest`.
pub struct HttpPortalClient {
    client: Client,
    portal_url: String,
    log_requests: bool,
}

impl HttpPortalClient {
    /// Creates a client from provider configuration.
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ProviderError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            portal_url: config.portal_url.clone(),
            log_requests: config.log_requests,
        })
    }

    /// Full request URL for a page query.
    pub fn url_for(&self, query: &UpstreamQuery) -> String {
        format!("{}?{}", self.portal_url, serialize_query_params(query))
    }
}

#[async_trait]
impl PortalClient for HttpPortalClient {
    async fn fetch_page(&self, query: &UpstreamQuery) -> ProviderResult<UpstreamPage> {
        let url = self.url_for(query);
        if self.log_requests {
            debug!(%url, "requesting search page");
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::upstream(500, format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(ProviderError::upstream(status.as_u16(), error));
        }

        let body = response.text().await?;
        decode_page(&body)
    }
}

fn decode_page(body: &str) -> ProviderResult<UpstreamPage> {
    match serde_json::from_str::<UpstreamPage>(body) {
        Ok(page) => Ok(page),
        Err(e) => match serde_json::from_str::<PortalErrorBody>(body) {
            Ok(PortalErrorBody { error }) => Err(ProviderError::upstream(
                error.code.filter(|c| (400..600).contains(c)).unwrap_or(500),
                error.message,
            )),
            Err(_) => Err(ProviderError::upstream(
                502,
                format!("unreadable search response: {e}"),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_and_ignores_extra_keys() {
        let page = decode_page(r#"{"query":"*","total":2,"start":1,"num":2,"nextStart":-1,"results":[{"id":"a"},{"id":"b"}]}"#)
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn error_document_becomes_upstream_error() {
        let err = decode_page(r#"{"error":{"code":400,"message":"Invalid query","details":[]}}"#)
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "Invalid query");
    }

    #[test]
    fn garbage_is_bad_gateway() {
        let err = decode_page("<html>down</html>").unwrap_err();
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn url_joins_portal_and_query() {
        let config = ProviderConfig {
            portal_url: "http://portal.test/sharing/rest/search".into(),
            ..Default::default()
        };
        let client = HttpPortalClient::new(&config).unwrap();
        assert_eq!(
            client.url_for(&UpstreamQuery::new("*", 100, 1)),
            "http://portal.test/sharing/rest/search?f=json&q=*&num=100&start=1"
        );
    }
}
