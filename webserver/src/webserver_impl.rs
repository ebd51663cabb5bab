//! Main webserver implementation
//!
//! The `WebServer` owns the shared state and builds the axum router around the
//! content workflow it was given.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use producer::{ChatProvider, ContentWorkflow};
use shared::{logging, ProcessId};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::api;

/// Backend HTTP server exposing the content workflow
pub struct WebServer<P: ChatProvider> {
    state: Arc<WebServerState<P>>,
}

impl<P: ChatProvider> Clone for WebServer<P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<P> WebServer<P>
where
    P: ChatProvider + 'static,
{
    pub fn new(bind_address: SocketAddr, workflow: ContentWorkflow<P>) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address, workflow)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/generate", post(api::generate::<P>))
            .route("/health", get(api::health::<P>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    // Browser clients call the endpoint cross-origin
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        logging::log_startup(
            ProcessId::current(),
            &format!("web server on http://{} (mode: {})", bind_address, self.state.workflow.mode()),
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        logging::log_success(ProcessId::current(), &self.shutdown_summary());
        Ok(())
    }

    /// One-line summary logged after a clean shutdown
    pub fn shutdown_summary(&self) -> String {
        format!(
            "Stopped cleanly after serving {} generation requests in {}s",
            self.state.requests_served(),
            self.state.get_uptime_seconds()
        )
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState<P>> {
        &self.state
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ProcessId::current(), "received Ctrl+C"),
        Err(e) => logging::log_error(ProcessId::current(), "Installing Ctrl+C handler", &e),
    }
}
