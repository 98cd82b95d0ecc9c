//! Portal search feature service
//!
//! Serves GeoServices-style feature queries backed by the ArcGIS portal
//! search API.
//!
//! Usage:
//!   portalsearch-server --port 8080
//!
//! The service is stateless; every query is answered from the portal.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use portalsearch_provider::{ProviderConfig, SearchModel};
use portalsearch_server::{build_router, query_path, DEFAULT_ROUTE_PREFIX};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "portalsearch-server")]
#[command(about = "Feature service over ArcGIS portal search")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, env = "PORTALSEARCH_PORT", default_value = "8080")]
    port: u16,

    /// Path prefix the query endpoint is mounted under
    #[arg(long, env = "PORTALSEARCH_ROUTE_PREFIX", default_value = DEFAULT_ROUTE_PREFIX)]
    route_prefix: String,

    /// Portal search endpoint
    #[arg(long, env = "PORTALSEARCH_PORTAL_URL")]
    portal_url: Option<String>,

    /// User-Agent sent to the portal
    #[arg(long, env = "PORTALSEARCH_USER_AGENT")]
    user_agent: Option<String>,

    /// Page size for follow-up page requests
    #[arg(long, env = "PORTALSEARCH_MAX_PAGE_SIZE")]
    max_page_size: Option<u32>,

    /// Transport timeout for portal requests, in seconds
    #[arg(long, env = "PORTALSEARCH_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "PORTALSEARCH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::default();
        if let Some(url) = &self.portal_url {
            config.portal_url = url.clone();
        }
        if let Some(agent) = &self.user_agent {
            config.user_agent = agent.clone();
        }
        if let Some(size) = self.max_page_size {
            config.max_page_size = size;
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let fallback = if args.verbose { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .context("Invalid log filter")?;
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("portalsearch server starting...");
    let config = args.provider_config();
    info!(portal = %config.portal_url, max_page_size = config.max_page_size, "provider configured");
    let model = SearchModel::new(config).context("Failed to create search model")?;

    let app = build_router(Arc::new(model), &args.route_prefix);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;

    info!("Listening on port {}", args.port);
    info!("Query endpoint: {}", query_path(&args.route_prefix));
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
