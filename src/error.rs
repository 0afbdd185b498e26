use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::database::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// 游戏或广告不存在
    #[error("{0}")]
    NotFound(String),

    /// 请求体格式或字段错误
    #[error("{0}")]
    Validation(String),

    /// 存储层约束冲突
    #[error("{0}")]
    ConstraintViolation(String),

    /// 数据库故障或已存数据损坏，细节只写日志
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("记录不存在".to_string()),
            StoreError::ForeignKeyViolation(detail) | StoreError::ConstraintViolation(detail) => {
                AppError::ConstraintViolation(detail)
            }
            other @ (StoreError::Corrupt(_) | StoreError::Database(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Internal(detail) => {
                tracing::error!("内部错误: {}", detail);
                "内部服务器错误".to_string()
            }
            other => {
                tracing::warn!("请求失败 ({}): {}", status, other);
                other.to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}
