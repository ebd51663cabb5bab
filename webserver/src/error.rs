//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use shared::{GenerateResponse, SharedError};
use producer::ProducerError;

/// Message returned when the request carries no usable product name
pub const MISSING_PRODUCT_NAME: &str = "productName is required";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("productName is required")]
    MissingProductName,

    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ProducerError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::MissingProductName => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let body = GenerateResponse::error_only(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
