// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求超时
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    /// 连接失败（DNS、拒绝连接等）
    #[error("Connection failed: {0}")]
    Connect(String),
    /// 其他请求失败
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl EngineError {
    /// 判断错误是否由超时引起
    pub fn is_timeout(&self) -> bool {
        matches!(self, EngineError::Timeout(_))
    }
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 请求头
    pub headers: HashMap<String, String>,
    /// 超时时间
    pub timeout: Duration,
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 内容类型（响应未携带时为 None）
    pub content_type: Option<String>,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl FetchResponse {
    /// 状态码是否为客户端或服务端错误（4xx/5xx）
    ///
    /// 未跟随的 3xx 与 304 等仍视为可解析的响应
    pub fn is_error_status(&self) -> bool {
        self.status_code >= 400
    }
}

/// 抓取引擎特质
///
/// 错误状态码不视为引擎错误，由调用方根据 `status_code` 判断
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
