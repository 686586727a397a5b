//! Gallery error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the gallery service.
///
/// Planning and normalization are total and never produce these; they come
/// from configuration and from the upstream fetch step.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GalleryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Network(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Config(_) => "config_error",
            Self::Network(_) => "network_error",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "server_error",
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.error_code(),
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for GalleryError {
    fn from(err: anyhow::Error) -> Self {
        GalleryError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            GalleryError::Config("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GalleryError::Network("x".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GalleryError::Upstream("x".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_display() {
        let err = GalleryError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network error: connection refused");
    }

    #[test]
    fn test_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("boom");
        let err: GalleryError = anyhow_err.into();
        match err {
            GalleryError::Internal(msg) => assert_eq!(msg, "boom"),
            _ => panic!("Expected Internal variant"),
        }
    }
}
