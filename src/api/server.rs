use std::sync::Arc;

use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::{limit::ConcurrencyLimitLayer, timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::api::handlers;
use crate::api::server_config::*;
use crate::core::config::GalleryConfig;
use crate::core::errors::GalleryError;
use crate::gallery::AlchemyGalleryClient;

#[derive(Clone)]
pub struct GalleryServer {
    pub client: Arc<AlchemyGalleryClient>,
    pub host: String,
    pub port: u16,
    pub config: GalleryConfig,
}

impl GalleryServer {
    pub fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        let client = Arc::new(AlchemyGalleryClient::new(&config.upstream)?);
        Ok(Self {
            client,
            host: config.server.host.clone(),
            port: config.server.port,
            config,
        })
    }

    /// Server wired to an existing client. Integration tests use this to
    /// point the pipeline at a mock upstream.
    pub fn with_client(config: GalleryConfig, client: AlchemyGalleryClient) -> Self {
        Self {
            client: Arc::new(client),
            host: config.server.host.clone(),
            port: config.server.port,
            config,
        }
    }

    pub fn create_router(self) -> Router {
        let state = Arc::new(self);

        let cors_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        tracing::info!("CORS configured to allow origin: {}", cors_origin);

        let cors_layer = CorsLayer::new()
            .allow_origin(if cors_origin.contains(',') {
                let list = cors_origin
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        axum::http::HeaderValue::from_str(s)
                            .expect("Invalid CORS origin in list")
                    })
                    .collect::<Vec<axum::http::HeaderValue>>();
                AllowOrigin::list(list)
            } else {
                AllowOrigin::exact(
                    axum::http::HeaderValue::from_str(&cors_origin)
                        .expect("Invalid CORS_ALLOW_ORIGIN environment variable"),
                )
            })
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::header::ORIGIN,
            ])
            .max_age(CORS_MAX_AGE);

        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/health", get(handlers::health_check))
            .route("/api/gallery", get(handlers::search_gallery))
            .layer(cors_layer)
            .layer(
                ServiceBuilder::new()
                    // Convert middleware errors (timeout/overload) into HTTP responses
                    .layer(HandleErrorLayer::new(|err: BoxError| async move {
                        if err.is::<tower::timeout::error::Elapsed>() {
                            (StatusCode::REQUEST_TIMEOUT, "request timed out")
                        } else {
                            (StatusCode::SERVICE_UNAVAILABLE, "service overloaded")
                        }
                    }))
                    .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENCY))
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                    .layer(TraceLayer::new_for_http()),
            )
            .with_state(state)
    }

    pub async fn start(self) -> Result<(), anyhow::Error> {
        let addr = format!("{}:{}", self.host, self.port);
        let app = self.create_router();
        tracing::info!("Server listening on {}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
