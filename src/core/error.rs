//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// HTTP 层错误类型
#[derive(Debug)]
pub enum CoreError {
    NotFound(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// 商品库拉取失败
///
/// 网络错误与解析错误对用户不做区分，一律回退到内置商品。
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("vault 请求失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vault 响应无法解析: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 点击上报失败，调用方从不观察它
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("点击上报失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("点击上报被拒绝: {0}")]
    Rejected(String),
}
