use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppResult,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{MovieProvider, TmdbProvider},
};

pub mod movies;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
    pub image_base_url: String,
    pub revalidate_secs: u64,
}

impl AppState {
    /// Creates state around an explicit provider
    pub fn new(provider: Arc<dyn MovieProvider>, config: &Config) -> Self {
        Self {
            provider,
            image_base_url: config.tmdb_image_url.clone(),
            revalidate_secs: config.revalidate_secs,
        }
    }

    /// Creates state backed by the TMDB provider
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = TmdbProvider::new(config)?;
        Ok(Self::new(Arc::new(provider), config))
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(movie_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
}

/// Movie proxy routes
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::popular))
        .route("/movies/search", get(movies::search))
        .route("/movies/:id", get(movies::details))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
