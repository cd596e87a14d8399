// 运行配置
//
// 全部来自环境变量（启动时先用 dotenv 加载 .env），
// 只有 TMDB_API_KEY 是凭据，其余都有默认值。

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::external::tmdb::{DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL};

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid http(s) URL: {value}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// 从进程环境变量读取
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数读取，方便测试
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = match get("TMDB_BASE_URL") {
            Some(value) => validate_url("TMDB_BASE_URL", value)?,
            None => defaults.api_base_url,
        };

        let image_base_url = match get("TMDB_IMAGE_BASE_URL") {
            Some(value) => validate_url("TMDB_IMAGE_BASE_URL", value)?,
            None => defaults.image_base_url,
        };

        let timeout = match get("TMDB_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_number("TMDB_TIMEOUT_SECS", value)?),
            None => defaults.timeout,
        };

        let port = match get("PORT") {
            Some(value) => parse_number("PORT", value)?,
            None => defaults.port,
        };

        Ok(Self {
            api_key: get("TMDB_API_KEY"),
            api_base_url,
            image_base_url,
            language: get("TMDB_LANGUAGE").unwrap_or(defaults.language),
            timeout,
            host: get("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn validate_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Ok(value.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl { name, value }),
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
