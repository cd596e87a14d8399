use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::validation::{NumberValidator, StringValidator, ValidationError};

/// 下拉框里表示"不筛选"的哨兵值
pub const ALL_SENTINEL: &str = "All";

/// 当前年份（年份下拉框的上限）
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// 页面提交上来的原始筛选参数
///
/// 全部按字符串接收，空字符串和 "All" 都视为未设置，
/// 解析失败时返回具体的 ValidationError 而不是 400。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub year: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub q: Option<String>,
}

/// 查询模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Browse,
    Search,
}

/// 筛选状态
///
/// 每次渲染从请求参数构造一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub year: Option<i32>,
    pub genre_id: Option<String>,
    pub min_rating: f32,
    pub search_query: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            year: None,
            genre_id: None,
            min_rating: 0.0,
            search_query: None,
        }
    }
}

impl FilterState {
    /// 构造并校验筛选状态
    pub fn new(
        year: Option<i32>,
        genre_id: Option<String>,
        min_rating: f32,
        search_query: Option<String>,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        let genre_id = genre_id.filter(|g| !is_unset(g));
        let search_query = search_query.filter(|q| !q.is_empty());

        NumberValidator::validate_year(&year, current_year)?;
        NumberValidator::validate_rating(min_rating)?;
        StringValidator::validate_genre_id(&genre_id)?;

        Ok(Self {
            year,
            genre_id,
            min_rating,
            search_query,
        })
    }

    /// 从页面参数解析
    pub fn from_params(params: &FilterParams, current_year: i32) -> Result<Self, ValidationError> {
        let year = match params.year.as_deref().map(str::trim) {
            Some(raw) if !is_unset(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| ValidationError::UnparsableYear(raw.to_string()))?,
            ),
            _ => None,
        };

        let min_rating = match params.min_rating.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<f32>()
                .map_err(|_| ValidationError::UnparsableRating(raw.to_string()))?,
            _ => 0.0,
        };

        Self::new(
            year,
            params.genre.as_ref().map(|g| g.trim().to_string()),
            min_rating,
            params.q.clone(),
            current_year,
        )
    }

    /// 搜索框非空时进入搜索模式，其余筛选条件全部忽略
    pub fn mode(&self) -> Mode {
        if self.search_query.is_some() {
            Mode::Search
        } else {
            Mode::Browse
        }
    }

    /// 还原为页面参数，用于生成保留当前筛选的链接
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (
                "year",
                self.year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| ALL_SENTINEL.to_string()),
            ),
            (
                "genre",
                self.genre_id
                    .clone()
                    .unwrap_or_else(|| ALL_SENTINEL.to_string()),
            ),
            ("min_rating", format!("{:.1}", self.min_rating)),
        ];

        if let Some(ref q) = self.search_query {
            pairs.push(("q", q.clone()));
        }

        pairs
    }
}

fn is_unset(raw: &str) -> bool {
    raw.is_empty() || raw == ALL_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(year: &str, genre: &str, min_rating: &str, q: &str) -> FilterParams {
        FilterParams {
            year: Some(year.to_string()),
            genre: Some(genre.to_string()),
            min_rating: Some(min_rating.to_string()),
            q: Some(q.to_string()),
        }
    }

    #[test]
    fn test_defaults_from_empty_params() {
        let state = FilterState::from_params(&FilterParams::default(), 2026).unwrap();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_all_sentinel_means_unset() {
        let state = FilterState::from_params(&params("All", "All", "0", ""), 2026).unwrap();
        assert_eq!(state.year, None);
        assert_eq!(state.genre_id, None);
        assert_eq!(state.min_rating, 0.0);
        assert_eq!(state.search_query, None);
    }

    #[test]
    fn test_parse_full_filters() {
        let state = FilterState::from_params(&params("2020", "28", "7.0", ""), 2026).unwrap();
        assert_eq!(state.year, Some(2020));
        assert_eq!(state.genre_id.as_deref(), Some("28"));
        assert_eq!(state.min_rating, 7.0);
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_search_mode() {
        let state = FilterState::from_params(&params("2020", "28", "7.0", "Inception"), 2026).unwrap();
        assert_eq!(state.mode(), Mode::Search);
        assert_eq!(state.search_query.as_deref(), Some("Inception"));

        // 只有空格也算非空
        let blank = FilterState::from_params(&params("All", "All", "0", "   "), 2026).unwrap();
        assert_eq!(blank.mode(), Mode::Search);
        assert_eq!(blank.search_query.as_deref(), Some("   "));
    }

    #[test]
    fn test_search_query_is_kept_literally() {
        let state = FilterState::from_params(&params("All", "All", "0", " The Matrix "), 2026).unwrap();
        assert_eq!(state.search_query.as_deref(), Some(" The Matrix "));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert_eq!(
            FilterState::from_params(&params("1850", "All", "0", ""), 2026),
            Err(ValidationError::InvalidYear(1850, 2026))
        );
        assert!(FilterState::from_params(&params("2030", "All", "0", ""), 2026).is_err());
        assert!(FilterState::from_params(&params("All", "All", "10.5", ""), 2026).is_err());
        assert_eq!(
            FilterState::from_params(&params("All", "All", "abc", ""), 2026),
            Err(ValidationError::UnparsableRating("abc".to_string()))
        );
        assert_eq!(
            FilterState::from_params(&params("All", "All", "7.25", ""), 2026),
            Err(ValidationError::OffStepRating(7.25))
        );
        assert_eq!(
            FilterState::from_params(&params("next", "All", "0", ""), 2026),
            Err(ValidationError::UnparsableYear("next".to_string()))
        );
        assert!(FilterState::from_params(&params("All", "drama", "0", ""), 2026).is_err());
    }

    #[test]
    fn test_query_pairs_round_trip() {
        let state = FilterState::from_params(&params("2020", "28", "7.5", "Heat"), 2026).unwrap();
        let pairs = state.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("year", "2020".to_string()),
                ("genre", "28".to_string()),
                ("min_rating", "7.5".to_string()),
                ("q", "Heat".to_string()),
            ]
        );

        let defaults = FilterState::default().to_query_pairs();
        assert_eq!(defaults[0], ("year", "All".to_string()));
        assert_eq!(defaults[1], ("genre", "All".to_string()));
        assert_eq!(defaults.len(), 3);
    }
}
