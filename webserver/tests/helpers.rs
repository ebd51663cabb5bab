//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use producer::{ChatProvider, ContentWorkflow, DeterministicProvider, WorkflowConfig};
use webserver::WebServer;

pub fn test_address() -> SocketAddr {
    "127.0.0.1:5000".parse().unwrap()
}

/// Server over the offline provider with the given workflow settings
pub fn offline_server(config: WorkflowConfig) -> WebServer<DeterministicProvider> {
    server_with(DeterministicProvider::new(), config)
}

pub fn server_with<P: ChatProvider + 'static>(provider: P, config: WorkflowConfig) -> WebServer<P> {
    WebServer::new(test_address(), ContentWorkflow::new(Arc::new(provider), &config))
}

/// POST a raw body to `/api/generate`
pub async fn post_generate(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(router, request).await
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, json)
}
