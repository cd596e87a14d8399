use serde::Serialize;

use crate::models::{FilterState, Mode};

/// TMDB 的排序方式：按热度倒序
pub const SORT_BY_POPULARITY: &str = "popularity.desc";

/// 只请求第一页
pub const FIRST_PAGE: u32 = 1;

/// 远端接口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "movie_id", rename_all = "snake_case")]
pub enum Endpoint {
    Genres,
    Discover,
    Search,
    Recommendations(u32),
}

impl Endpoint {
    /// 相对于 API base 的路径
    pub fn path(&self) -> String {
        match self {
            Endpoint::Genres => "/genre/movie/list".to_string(),
            Endpoint::Discover => "/discover/movie".to_string(),
            Endpoint::Search => "/search/movie".to_string(),
            Endpoint::Recommendations(id) => format!("/movie/{}/recommendations", id),
        }
    }

    /// 响应体中必须存在的顶层字段
    pub fn payload_field(&self) -> &'static str {
        match self {
            Endpoint::Genres => "genres",
            _ => "results",
        }
    }
}

/// 一次远端请求：目标接口 + 有序参数
///
/// api_key 不在这里出现，由客户端发送时追加。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl RemoteRequest {
    fn new(endpoint: Endpoint, language: &str) -> Self {
        Self {
            endpoint,
            params: vec![("language".to_string(), language.to_string())],
        }
    }

    fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// 按名称取参数值
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }
}

/// 把筛选状态翻译成远端请求
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    language: String,
}

impl QueryBuilder {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// 类型列表
    pub fn genres(&self) -> RemoteRequest {
        RemoteRequest::new(Endpoint::Genres, &self.language)
    }

    /// 根据筛选状态选择 discover 或 search
    pub fn movies(&self, filters: &FilterState) -> RemoteRequest {
        match (filters.mode(), filters.search_query.as_deref()) {
            (Mode::Search, Some(query)) => self.search(query),
            _ => self.discover(filters),
        }
    }

    /// 浏览模式：未设置的筛选项不出现在参数里
    pub fn discover(&self, filters: &FilterState) -> RemoteRequest {
        let mut request = RemoteRequest::new(Endpoint::Discover, &self.language)
            .with("page", FIRST_PAGE)
            .with("sort_by", SORT_BY_POPULARITY);

        if let Some(year) = filters.year {
            request = request.with("primary_release_year", year);
        }

        if let Some(ref genre_id) = filters.genre_id {
            request = request.with("with_genres", genre_id);
        }

        if filters.min_rating > 0.0 {
            request = request.with("vote_average.gte", format!("{:.1}", filters.min_rating));
        }

        request
    }

    /// 搜索模式：查询字符串原样传递
    pub fn search(&self, query: &str) -> RemoteRequest {
        RemoteRequest::new(Endpoint::Search, &self.language)
            .with("query", query)
            .with("page", FIRST_PAGE)
    }

    /// 相似推荐，不带任何筛选
    pub fn recommendations(&self, movie_id: u32) -> RemoteRequest {
        RemoteRequest::new(Endpoint::Recommendations(movie_id), &self.language)
            .with("page", FIRST_PAGE)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new("en-US")
    }
}
