use serde::{Deserialize, Serialize};

/// 电影类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    /// 作为筛选参数时使用的字符串ID
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}
