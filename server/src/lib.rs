//! HTTP API for the portal search feature service.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use portalsearch_provider::{ProviderError, SearchModel};
use portalsearch_types::RequestQuery;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mount point used when none is configured.
pub const DEFAULT_ROUTE_PREFIX: &str = "/api/v3/connectors";

/// Parameters that are always taken verbatim, never parsed as JSON.
const TEXT_PARAMS: [&str; 4] = ["where", "orderByFields", "outFields", "f"];

/// Error body returned for failed queries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
}

impl From<&ProviderError> for ErrorResponse {
    fn from(e: &ProviderError) -> Self {
        Self {
            error: ErrorDetail {
                code: e.status_code(),
                message: e.client_message().to_string(),
            },
        }
    }
}

/// Path of the query endpoint under a route prefix.
pub fn query_path(route_prefix: &str) -> String {
    let prefix = route_prefix.trim_end_matches('/');
    if prefix.is_empty() || prefix.starts_with('/') {
        format!("{prefix}/arcgis-search/FeatureServer/0/query")
    } else {
        format!("/{prefix}/arcgis-search/FeatureServer/0/query")
    }
}

/// Converts raw query-string pairs into the provider's query bag.
///
/// Values that parse as JSON (numbers, objects, arrays, booleans) are
/// passed on typed; anything else stays a string.
pub fn request_query(params: HashMap<String, String>) -> RequestQuery {
    params
        .into_iter()
        .map(|(key, raw)| {
            let value = if TEXT_PARAMS.contains(&key.as_str()) {
                Value::String(raw)
            } else {
                match serde_json::from_str::<Value>(&raw) {
                    Ok(Value::String(_)) | Ok(Value::Null) | Err(_) => Value::String(raw),
                    Ok(parsed) => parsed,
                }
            };
            (key, value)
        })
        .collect()
}

async fn query_handler(
    State(model): State<Arc<SearchModel>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match model.get_data(&request_query(params)).await {
        Ok(collection) => Json(collection).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Build the HTTP API router around a search model.
pub fn build_router(model: Arc<SearchModel>, route_prefix: &str) -> Router {
    Router::new()
        .route(&query_path(route_prefix), get(query_handler))
        .route("/health", get(health_handler))
        .with_state(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_path_normalizes_prefix() {
        assert_eq!(
            query_path("/api/v3/connectors/"),
            "/api/v3/connectors/arcgis-search/FeatureServer/0/query"
        );
        assert_eq!(query_path("koop"), "/koop/arcgis-search/FeatureServer/0/query");
        assert_eq!(query_path(""), "/arcgis-search/FeatureServer/0/query");
    }

    #[test]
    fn json_values_are_typed() {
        let query = request_query(params(&[
            ("inSR", "102100"),
            ("geometry", r#"{"xmin":1,"ymin":2,"xmax":3,"ymax":4}"#),
            ("returnGeometry", "true"),
        ]));
        assert_eq!(query["inSR"], json!(102100));
        assert_eq!(query["geometry"]["xmax"], json!(3));
        assert_eq!(query["returnGeometry"], json!(true));
    }

    #[test]
    fn text_values_stay_strings() {
        let query = request_query(params(&[
            ("where", "1=1"),
            ("orderByFields", "created ASC"),
            ("geometry", "-118,32,-116,34"),
            ("resultOffset", "\"21\""),
        ]));
        assert_eq!(query["where"], json!("1=1"));
        assert_eq!(query["orderByFields"], json!("created ASC"));
        assert_eq!(query["geometry"], json!("-118,32,-116,34"));
        assert_eq!(query["resultOffset"], json!("\"21\""));
    }
}
