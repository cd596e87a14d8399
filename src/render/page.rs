use super::grid::{Expanded, Grid, Recommendations};
use crate::models::{FilterState, Genre};
use crate::services::MovieCatalog;

/// 一次页面渲染所需的全部数据
#[derive(Debug, Clone)]
pub struct PageModel {
    pub filters: FilterState,
    pub genres: Vec<Genre>,
    pub grid: Grid,
    pub expanded: Expanded,
    /// 远端调用失败时展示的错误信息
    pub errors: Vec<String>,
    pub current_year: i32,
}

impl PageModel {
    /// 依次请求：类型列表 → 电影列表 → 每个已展开单元的推荐
    pub async fn load(
        catalog: &MovieCatalog,
        filters: FilterState,
        expanded: Expanded,
        image_base: &str,
        current_year: i32,
    ) -> Self {
        let mut errors = Vec::new();

        let genres = catalog.genres_or_empty().await;
        errors.extend(genres.error);

        let movies = catalog.movies_or_empty(&filters).await;
        errors.extend(movies.error);

        let mut grid = Grid::primary(&movies.items, image_base);

        for cell in grid.cells_mut() {
            if !expanded.contains(cell.movie_id) {
                continue;
            }

            let recommended = catalog.recommendations_or_empty(cell.movie_id).await;
            cell.recommendations = Some(Recommendations {
                grid: Grid::recommendations(&recommended.items, image_base),
                error: recommended.error,
            });
        }

        tracing::debug!(
            mode = ?filters.mode(),
            cells = grid.len(),
            expanded = %expanded.to_param(),
            "page loaded"
        );

        Self {
            filters,
            genres: genres.items,
            grid,
            expanded,
            errors,
            current_year,
        }
    }
}
