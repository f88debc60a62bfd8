// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::application::dto::scrape_request::validation_message;

/// 应用错误类型
///
/// 只有请求层面的错误会到达这里；单个URL的失败记录在各自的结果中
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求参数校验失败
    #[error("{0}")]
    Validation(String),
    /// 请求体无法解析为 JSON
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_message(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(rejection) => rejection.status(),
        };

        let error_message = match &self {
            AppError::Rejected(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
