use axum::{extract::State, response::IntoResponse};
use serde_json::json;

use super::response::success;
use super::AppState;

/// 健康检查端点
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tmdb_status = if state.catalog.is_available() {
        "available"
    } else {
        "not_configured"
    };

    success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "language": state.catalog.queries().language(),
        "tmdb_api": tmdb_status
    }))
}
