use thiserror::Error;

/// 最早可选的上映年份
pub const MIN_YEAR: i32 = 1900;

/// 评分上下限
pub const MIN_RATING: f32 = 0.0;
pub const MAX_RATING: f32 = 10.0;
/// 评分滑块步长
pub const RATING_STEP: f32 = 0.5;

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid year: {0} (must be between 1900 and {1})")]
    InvalidYear(i32, i32),

    #[error("Invalid year value: {0}")]
    UnparsableYear(String),

    #[error("Invalid rating: {0} (must be between 0.0 and 10.0)")]
    InvalidRating(f32),

    #[error("Invalid rating: {0} (must be a multiple of 0.5)")]
    OffStepRating(f32),

    #[error("Invalid rating value: {0}")]
    UnparsableRating(String),

    #[error("Invalid genre id: {0}")]
    InvalidGenre(String),

    #[error("Invalid movie id: {0}")]
    InvalidMovieId(String),
}

/// 数值验证工具
pub struct NumberValidator;

impl NumberValidator {
    /// 年份必须落在 [1900, current_year] 内
    pub fn validate_year(year: &Option<i32>, current_year: i32) -> Result<(), ValidationError> {
        if let Some(y) = year {
            if *y < MIN_YEAR || *y > current_year {
                return Err(ValidationError::InvalidYear(*y, current_year));
            }
        }
        Ok(())
    }

    pub fn validate_rating(rating: f32) -> Result<(), ValidationError> {
        // NaN 不满足任何比较，需要单独拒绝
        if rating.is_nan() || rating < MIN_RATING || rating > MAX_RATING {
            return Err(ValidationError::InvalidRating(rating));
        }
        // 远端参数按一位小数发送，只接受滑块上的取值
        if (rating / RATING_STEP).fract() != 0.0 {
            return Err(ValidationError::OffStepRating(rating));
        }
        Ok(())
    }
}

/// 字符串验证工具
pub struct StringValidator;

impl StringValidator {
    /// TMDB 的类型ID是纯数字
    pub fn validate_genre_id(genre_id: &Option<String>) -> Result<(), ValidationError> {
        if let Some(id) = genre_id {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::InvalidGenre(id.clone()));
            }
        }
        Ok(())
    }
}
