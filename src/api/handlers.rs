//! Gallery API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::api::server::GalleryServer;
use crate::api::types::{GalleryQuery, GalleryResponse};
use crate::gallery::SearchInput;

/// GET /api/gallery
///
/// Runs one search submission through the pipeline. Insufficient input is a
/// valid empty gallery, not an error.
pub async fn search_gallery(
    State(state): State<Arc<GalleryServer>>,
    Query(params): Query<GalleryQuery>,
) -> Response {
    info!(
        "gallery search: wallet={} collection={} for_collection={}",
        params.wallet, params.collection, params.for_collection
    );

    let input = SearchInput::from(params);

    match state.client.fetch_gallery(&input).await {
        Ok(nfts) => {
            info!("fetched {} NFTs", nfts.len());
            Json(GalleryResponse {
                total: nfts.len(),
                nfts,
            })
            .into_response()
        }
        Err(e) => {
            error!("gallery fetch failed: {}", e);
            e.into_response()
        }
    }
}

/// Liveness probe
pub async fn health_check() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
