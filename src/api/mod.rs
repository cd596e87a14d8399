pub mod error;
pub mod health;
pub mod movies;
pub mod pages;
pub mod response;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::external::{MovieSource, QueryBuilder};
use crate::services::MovieCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    pub image_base_url: String,
}

impl AppState {
    pub fn new(source: Option<Arc<dyn MovieSource>>, config: &AppConfig) -> Self {
        Self {
            catalog: MovieCatalog::new(source, QueryBuilder::new(config.language.clone())),
            image_base_url: config.image_base_url.clone(),
        }
    }
}

/// 构建全部路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::discover_page))
        .route("/api/health", get(health::health_check))
        .route("/api/genres", get(movies::list_genres))
        .route("/api/movies", get(movies::list_movies))
        .route(
            "/api/movies/:id/recommendations",
            get(movies::list_recommendations),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
