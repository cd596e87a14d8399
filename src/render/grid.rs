use serde::Serialize;

use crate::models::Movie;

/// 主网格最多展示的电影数
pub const PRIMARY_LIMIT: usize = 8;
/// 推荐网格最多展示的电影数
pub const RECOMMENDATION_LIMIT: usize = 4;
/// 每行列数
pub const COLUMNS: usize = 4;

/// 星标前缀
pub const STAR: &str = "⭐";

/// 单个网格单元
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub movie_id: u32,
    pub title: String,
    pub poster_url: Option<String>,
    pub rating: String,
    pub column: usize,
    /// 是否提供 "Get Recommendations" 操作（推荐网格里的单元没有）
    pub expandable: bool,
    pub recommendations: Option<Recommendations>,
}

impl CellView {
    fn new(index: usize, movie: &Movie, image_base: &str, expandable: bool) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url(image_base),
            rating: format!("{} {}", STAR, movie.rating_string()),
            column: index % COLUMNS,
            expandable,
            recommendations: None,
        }
    }
}

/// 展开后的推荐结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub grid: Grid,
    pub error: Option<String>,
}

/// 按行排列的网格（行优先，第 i 个放在 i % 4 列）
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Grid {
    pub rows: Vec<Vec<CellView>>,
}

impl Grid {
    fn layout(movies: &[Movie], limit: usize, image_base: &str, expandable: bool) -> Self {
        let cells: Vec<CellView> = movies
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, movie)| CellView::new(index, movie, image_base, expandable))
            .collect();

        let rows = cells.chunks(COLUMNS).map(|row| row.to_vec()).collect();
        Self { rows }
    }

    /// 主网格：前 8 个，带推荐操作
    pub fn primary(movies: &[Movie], image_base: &str) -> Self {
        Self::layout(movies, PRIMARY_LIMIT, image_base, true)
    }

    /// 推荐网格：前 4 个，不再嵌套操作
    pub fn recommendations(movies: &[Movie], image_base: &str) -> Self {
        Self::layout(movies, RECOMMENDATION_LIMIT, image_base, false)
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellView> {
        self.rows.iter_mut().flatten()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 已展开的电影ID集合（保持点击顺序，去重）
///
/// 只会增加不会减少；筛选条件变化时页面表单不携带它，所以自然重置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expanded {
    ids: Vec<u32>,
}

impl Expanded {
    /// 解析 `expand=1,2,3`，无法解析的片段直接忽略
    pub fn parse(raw: Option<&str>) -> Self {
        let mut expanded = Self::default();
        for id in raw
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse::<u32>().ok())
        {
            expanded.insert(id);
        }
        expanded
    }

    fn insert(&mut self, id: u32) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// 加入一个ID后的新集合；已存在时原样返回
    pub fn with(&self, id: u32) -> Self {
        let mut next = self.clone();
        next.insert(id);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_param(&self) -> String {
        self.ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}
