use serde::{Deserialize, Serialize};

/// TMDB 返回的电影条目（只保留页面用到的字段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub vote_average: f32,
}

impl Movie {
    /// 评分字符串，固定一位小数
    pub fn rating_string(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// 拼接海报地址；没有 poster_path 时返回 None
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(|path| join_image_url(image_base, path))
    }
}

/// `{image_base}/{poster_path}`，两侧多余的斜杠只保留一个
pub fn join_image_url(image_base: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}
