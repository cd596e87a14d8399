use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::query::{Endpoint, RemoteRequest};
use super::MovieSource;
use crate::models::{Genre, Movie};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// 远端调用失败
///
/// 页面层不区分这些分支，统一降级为空列表并显示错误信息。
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB API key not configured")]
    NotConfigured,

    /// 已去掉请求地址（地址里带着 api_key）
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("TMDB API error: status {0}")]
    Status(u16),

    #[error("response is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("response is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("unexpected '{field}' payload: {source}")]
    Decode {
        field: &'static str,
        source: serde_json::Error,
    },
}

pub type TmdbResult<T> = Result<T, TmdbError>;

/// TMDB API客户端
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, base_url: impl Into<String>, timeout: Duration) -> TmdbResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 完整请求地址（不含查询参数）
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn get_json(&self, request: &RemoteRequest) -> TmdbResult<Value> {
        let url = self.url_for(&request.endpoint);

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(request.params.len() + 1);
        query.push(("api_key", self.api_key.as_str()));
        query.extend(request.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        tracing::debug!(
            endpoint = %request.endpoint.path(),
            params = request.params.len(),
            "TMDB request"
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(TmdbError::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(TmdbError::InvalidJson)
    }
}

fn transport_error(e: reqwest::Error) -> TmdbError {
    TmdbError::Http(e.without_url())
}

/// 取出响应中必须存在的顶层字段并反序列化
fn take_field<T: DeserializeOwned>(mut body: Value, field: &'static str) -> TmdbResult<T> {
    let payload = body
        .get_mut(field)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or(TmdbError::MissingField(field))?;

    serde_json::from_value(payload).map_err(|source| TmdbError::Decode { field, source })
}

/// 解析 `{"genres": [...]}`
pub fn decode_genres(body: Value) -> TmdbResult<Vec<Genre>> {
    take_field(body, "genres")
}

/// 解析 `{"results": [...]}`
pub fn decode_movies(body: Value) -> TmdbResult<Vec<Movie>> {
    take_field(body, "results")
}
