// 电影发现前端
//
// 本库提供：
// - 筛选状态与远端请求的构建（Query Builder）
// - TMDB 客户端
// - 结果网格渲染
// - HTTP 路由

pub mod api;
pub mod config;
pub mod external;
pub mod models;
pub mod render;
pub mod services;

pub use api::{router, AppState};
pub use config::AppConfig;
