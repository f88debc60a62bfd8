// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;
use thiserror::Error;

use crate::engines::traits::EngineError;

/// 单个URL抓取错误类型
///
/// 传输层错误直接描述失败原因；提取阶段的错误带有 "Unexpected error: " 前缀
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrapeError {
    #[error("Request timed out after {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("Connection error: {detail}")]
    Connect { detail: String },

    #[error("Request error: {detail}")]
    Request { detail: String },

    #[error("HTTP error: status code {status}")]
    HttpStatus { status: u16 },

    #[error("Unexpected error: invalid selector '{selector}' for field '{field}'")]
    InvalidSelector { field: String, selector: String },

    #[error("Unexpected error: unsupported content type '{content_type}'")]
    UnsupportedContentType { content_type: String },

    #[error("Unexpected error: {detail}")]
    TaskFailed { detail: String },
}

impl ScrapeError {
    /// 是否为传输层错误（网络、超时、非成功状态码）
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ScrapeError::Timeout { .. }
                | ScrapeError::Connect { .. }
                | ScrapeError::Request { .. }
                | ScrapeError::HttpStatus { .. }
        )
    }
}

impl From<EngineError> for ScrapeError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Timeout(timeout) => ScrapeError::Timeout { timeout },
            EngineError::Connect(detail) => ScrapeError::Connect { detail },
            EngineError::RequestFailed(detail) => ScrapeError::Request { detail },
        }
    }
}
