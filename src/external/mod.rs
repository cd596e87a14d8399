pub mod query;
pub mod tmdb;

use async_trait::async_trait;
use serde_json::Value;

pub use query::{Endpoint, QueryBuilder, RemoteRequest};
pub use tmdb::{decode_genres, decode_movies, TmdbClient, TmdbError, TmdbResult};

/// 远端电影数据源
///
/// 生产环境由 [`TmdbClient`] 实现；测试里用内存实现替换。
/// 只负责把请求发出去并拿回 JSON，字段校验在调用方完成。
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn get_json(&self, request: &RemoteRequest) -> TmdbResult<Value>;
}
