//! REST API handlers
//!
//! `POST /api/generate` runs the content workflow; `GET /health` reports liveness.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use producer::ChatProvider;
use shared::{GenerateResponse, ProcessId, process_debug, process_error, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;

/// Read `productName` from a raw body; malformed JSON reads as `{}`
pub fn product_name_from_body(body: &[u8]) -> Option<String> {
    let data: Value = serde_json::from_slice(body).unwrap_or_else(|_| json!({}));
    data.get("productName")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Generate FAQ content for one product
pub async fn generate<P>(
    State(state): State<Arc<WebServerState<P>>>,
    body: Bytes,
) -> WebServerResult<Json<GenerateResponse>>
where
    P: ChatProvider + 'static,
{
    let product_name = product_name_from_body(&body).ok_or(WebServerError::MissingProductName)?;
    let request_no = state.record_request();
    process_info!(ProcessId::current(), "📥 Request #{} for '{}'", request_no, product_name);

    // The workflow folds its own errors into the body; only a crashed task is a 500
    let worker = state.clone();
    let response = tokio::spawn(async move { worker.workflow.run(&product_name).await })
        .await
        .map_err(|e| {
            process_error!(ProcessId::current(), "Content workflow task failed: {}", e);
            WebServerError::Internal(e.to_string())
        })?;

    process_debug!(ProcessId::current(), "Request #{} finished with mode {:?}", request_no, response.mode);
    Ok(Json(response))
}

/// Health check endpoint
pub async fn health<P>(State(state): State<Arc<WebServerState<P>>>) -> Json<Value>
where
    P: ChatProvider + 'static,
{
    Json(json!({
        "status": "healthy",
        "mode": state.workflow.mode(),
        "uptime": state.get_uptime_seconds(),
        "requests_served": state.requests_served(),
    }))
}
