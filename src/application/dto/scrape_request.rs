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

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::settings::ScraperSettings;
use crate::domain::models::batch_request::{BatchRequest, SelectorRules};

/// 批量抓取请求数据传输对象
///
/// 用于封装客户端提交的一批URL及其提取参数
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ScrapeBatchRequestDto {
    /// 要抓取的URL列表，不能为空
    #[validate(
        length(min = 1, message = "No URLs provided"),
        custom(function = "validate_urls")
    )]
    pub urls: Vec<String>,
    /// 选择器规则：字段名 -> CSS 选择器
    pub selectors: Option<SelectorRules>,
    /// 超时时间（秒）
    #[validate(range(min = 1, message = "timeout must be at least 1 second"))]
    pub timeout: Option<u64>,
    /// 自定义HTTP请求头
    pub headers: Option<HashMap<String, String>>,
}

impl ScrapeBatchRequestDto {
    /// 转换为领域层的批量请求
    ///
    /// 未提供的超时时间和请求头使用配置中的默认值；空的请求头或选择器视为未提供
    pub fn into_batch_request(self, settings: &ScraperSettings) -> BatchRequest {
        let timeout = Duration::from_secs(self.timeout.unwrap_or(settings.default_timeout_secs));

        let headers = match self.headers {
            Some(headers) if !headers.is_empty() => headers,
            _ => HashMap::from([("User-Agent".to_string(), settings.user_agent.clone())]),
        };

        BatchRequest {
            urls: self.urls,
            selectors: self.selectors.filter(|rules| !rules.is_empty()),
            timeout,
            headers,
        }
    }
}

/// 校验每个URL均为带主机名的 http/https 绝对地址
#[allow(clippy::ptr_arg)]
fn validate_urls(urls: &Vec<String>) -> Result<(), ValidationError> {
    for raw in urls {
        let valid = Url::parse(raw)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
            .unwrap_or(false);
        if !valid {
            return Err(ValidationError::new("url")
                .with_message(Cow::Owned(format!("invalid URL: {}", raw))));
        }
    }
    Ok(())
}

/// 将校验错误整理为一条可读信息
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
