use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::external::TmdbError;
use crate::models::ValidationError;

/// 统一的API错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 筛选参数不合法
    Validation(String),
    /// 请求参数错误
    BadRequest(String),
    /// 外部服务错误
    ExternalService(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::ExternalService(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// 从ValidationError转换
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// 从TmdbError转换
impl From<TmdbError> for ApiError {
    fn from(err: TmdbError) -> Self {
        ApiError::ExternalService(err.to_string())
    }
}

/// 实现IntoResponse，将错误转换为HTTP响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message) = match self {
            ApiError::Validation(msg) => ("validation_error", msg),
            ApiError::BadRequest(msg) => ("bad_request", msg),
            ApiError::ExternalService(msg) => {
                tracing::error!("External service error: {}", msg);
                ("external_service_error", msg)
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ApiError::BadRequest("movie id must be a number".to_string());
        assert_eq!(error.to_string(), "Bad request: movie id must be a number");
    }

    #[test]
    fn test_error_conversion() {
        let api_error: ApiError = ValidationError::InvalidRating(12.0).into();
        assert!(matches!(api_error, ApiError::Validation(_)));
        assert_eq!(api_error.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let api_error: ApiError = TmdbError::Status(503).into();
        assert!(matches!(api_error, ApiError::ExternalService(_)));
        assert_eq!(api_error.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::ExternalService("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let response = ApiError::BadRequest("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
