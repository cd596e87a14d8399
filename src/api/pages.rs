use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::models::{current_year, FilterParams, FilterState};
use crate::render::{render_error_page, render_page, Expanded, PageModel};

/// 页面查询参数：筛选条件 + 已展开的电影
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub year: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub q: Option<String>,
    pub expand: Option<String>,
}

impl PageParams {
    fn filters(&self) -> FilterParams {
        FilterParams {
            year: self.year.clone(),
            genre: self.genre.clone(),
            min_rating: self.min_rating.clone(),
            q: self.q.clone(),
        }
    }
}

/// 电影发现页
///
/// 远端失败不会让页面出错，只在页面上显示错误信息；
/// 参数越界时返回 422 和说明页。
pub async fn discover_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Response {
    let year = current_year();

    let filters = match FilterState::from_params(&params.filters(), year) {
        Ok(filters) => filters,
        Err(e) => {
            tracing::warn!("Rejected filters: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_error_page(&e.to_string())),
            )
                .into_response();
        }
    };

    let expanded = Expanded::parse(params.expand.as_deref());
    let model = PageModel::load(&state.catalog, filters, expanded, &state.image_base_url, year).await;

    Html(render_page(&model)).into_response()
}
