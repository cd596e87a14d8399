use std::sync::Arc;

use serde::Serialize;

use crate::external::{
    decode_genres, decode_movies, MovieSource, QueryBuilder, RemoteRequest, TmdbError, TmdbResult,
};
use crate::models::{FilterState, Genre, Mode, Movie};

/// 一次远端调用的结果：失败时 items 为空，error 为展示给用户的信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Fetched<T> {
    fn from_result(result: TmdbResult<Vec<T>>, context: &str) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                Self {
                    items: Vec::new(),
                    error: Some(format!("{}: {}", context, e)),
                }
            }
        }
    }
}

/// 电影目录：Query Builder + 远端数据源
///
/// 没有配置 API key 时 source 为 None，每次调用都返回 NotConfigured。
#[derive(Clone)]
pub struct MovieCatalog {
    source: Option<Arc<dyn MovieSource>>,
    queries: QueryBuilder,
}

impl MovieCatalog {
    pub fn new(source: Option<Arc<dyn MovieSource>>, queries: QueryBuilder) -> Self {
        Self { source, queries }
    }

    pub fn is_available(&self) -> bool {
        self.source.is_some()
    }

    pub fn queries(&self) -> &QueryBuilder {
        &self.queries
    }

    async fn call(&self, request: &RemoteRequest) -> TmdbResult<serde_json::Value> {
        match self.source {
            Some(ref source) => source.get_json(request).await,
            None => Err(TmdbError::NotConfigured),
        }
    }

    /// 获取类型列表
    pub async fn genres(&self) -> TmdbResult<Vec<Genre>> {
        let body = self.call(&self.queries.genres()).await?;
        decode_genres(body)
    }

    /// 按筛选状态获取电影（discover 或 search）
    pub async fn movies(&self, filters: &FilterState) -> TmdbResult<Vec<Movie>> {
        let body = self.call(&self.queries.movies(filters)).await?;
        decode_movies(body)
    }

    /// 获取相似推荐
    pub async fn recommendations(&self, movie_id: u32) -> TmdbResult<Vec<Movie>> {
        let body = self.call(&self.queries.recommendations(movie_id)).await?;
        decode_movies(body)
    }

    // 以下是页面使用的降级版本：出错不向上传播

    pub async fn genres_or_empty(&self) -> Fetched<Genre> {
        Fetched::from_result(self.genres().await, "Error fetching genres")
    }

    pub async fn movies_or_empty(&self, filters: &FilterState) -> Fetched<Movie> {
        let context = match filters.mode() {
            Mode::Search => "Error searching movies",
            Mode::Browse => "Error fetching movies",
        };
        Fetched::from_result(self.movies(filters).await, context)
    }

    pub async fn recommendations_or_empty(&self, movie_id: u32) -> Fetched<Movie> {
        Fetched::from_result(
            self.recommendations(movie_id).await,
            "Error fetching recommendations",
        )
    }
}
