use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::response::{success, ApiResponse, ListResponse};
use super::AppState;
use crate::models::{current_year, FilterParams, FilterState, Mode, Movie, ValidationError};

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub mode: Mode,
    pub filters: FilterState,
    pub results: Vec<Movie>,
    pub total: usize,
}

/// 类型列表
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let genres = state.catalog.genres().await?;
    Ok(success(ListResponse::new(genres)))
}

/// 按筛选条件获取电影（远端第一页，不做截断）
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<impl IntoResponse> {
    let filters = FilterState::from_params(&params, current_year())?;
    let mode = filters.mode();

    let results = state.catalog.movies(&filters).await.map_err(|e| match mode {
        Mode::Search => ApiError::ExternalService(format!("Failed to search movies: {}", e)),
        Mode::Browse => ApiError::ExternalService(format!("Failed to fetch movies: {}", e)),
    })?;

    let total = results.len();
    Ok(ApiResponse::success(MoviesResponse {
        mode,
        filters,
        results,
        total,
    }))
}

/// 相似推荐（远端第一页，不做截断）
pub async fn list_recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let movie_id: u32 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(ValidationError::InvalidMovieId(id.clone()).to_string()))?;

    let results = state
        .catalog
        .recommendations(movie_id)
        .await
        .map_err(|e| ApiError::ExternalService(format!("Failed to fetch recommendations: {}", e)))?;

    Ok(success(ListResponse::new(results)))
}
