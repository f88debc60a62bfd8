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

use crate::engines::traits::{EngineError, FetchEngine, FetchRequest, FetchResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::error::Error as StdError;
use std::time::{Duration, Instant};
use tracing::warn;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，进程内共享一个连接池
#[derive(Debug, Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎
    ///
    /// 不启用 cookie 存储，请求之间不共享任何状态
    pub fn new() -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| EngineError::RequestFailed(render_chain(&e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP GET抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应（包括 4xx/5xx 状态码）
    /// * `Err(EngineError)` - 传输层错误
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        let headers = build_headers(&request.headers);

        let start = Instant::now();
        let response = self
            .client
            .get(&request.url)
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string());

        let content = response
            .text()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        Ok(FetchResponse {
            status_code,
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// 构建请求头，跳过无法表示为 HTTP 头的条目
fn build_headers(raw: &std::collections::HashMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (k, v) in raw {
        match (
            HeaderName::from_bytes(k.as_bytes()),
            HeaderValue::from_str(v),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Skipping invalid request header: {}", k),
        }
    }
    headers
}

/// 将 reqwest 错误归类为引擎错误
fn classify(err: reqwest::Error, timeout: Duration) -> EngineError {
    if err.is_timeout() {
        EngineError::Timeout(timeout)
    } else if err.is_connect() {
        EngineError::Connect(render_chain(&err))
    } else {
        EngineError::RequestFailed(render_chain(&err))
    }
}

/// 展开错误链，得到可读的错误描述
fn render_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
