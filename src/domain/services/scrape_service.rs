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

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::config::settings::ScraperSettings;
use crate::domain::models::batch_request::BatchRequest;
use crate::domain::models::scrape_result::{ExtractedData, ScrapeResult};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{FetchEngine, FetchRequest};
use crate::utils::errors::ScrapeError;

/// 抓取服务
///
/// 负责单个URL的抓取与提取。无论成功与否都只产生一条结果，错误不会向外传播
pub struct ScrapeService {
    engine: Arc<dyn FetchEngine>,
    max_links: usize,
    reject_non_html: bool,
}

impl ScrapeService {
    /// 创建新的抓取服务
    ///
    /// # 参数
    ///
    /// * `engine` - 抓取引擎
    /// * `settings` - 抓取配置
    pub fn new(engine: Arc<dyn FetchEngine>, settings: &ScraperSettings) -> Self {
        Self {
            engine,
            max_links: settings.max_links,
            reject_non_html: settings.reject_non_html,
        }
    }

    /// 抓取并提取单个URL
    ///
    /// # 参数
    ///
    /// * `url` - 提交时的URL
    /// * `request` - 批次共享的只读参数（选择器、超时、请求头）
    ///
    /// # 返回值
    ///
    /// 该URL的抓取结果，耗时从发起请求开始计算
    pub async fn scrape_one(&self, url: &str, request: &BatchRequest) -> ScrapeResult {
        let start = Instant::now();
        info!("Scraping URL: {}", url);

        match self.fetch_and_extract(url, request).await {
            Ok(data) => {
                let elapsed = start.elapsed();
                debug!("Scraped {} in {:.3}s", url, elapsed.as_secs_f64());
                ScrapeResult::success(url, data, elapsed)
            }
            Err(e) => {
                let elapsed = start.elapsed();
                if e.is_transport() {
                    error!("Error scraping {}: {}", url, e);
                } else {
                    error!("Unexpected error scraping {}: {}", url, e);
                }
                ScrapeResult::failure(url, &e, elapsed)
            }
        }
    }

    async fn fetch_and_extract(
        &self,
        url: &str,
        request: &BatchRequest,
    ) -> Result<ExtractedData, ScrapeError> {
        let fetch_request = FetchRequest {
            url: url.to_string(),
            headers: request.headers.clone(),
            timeout: request.timeout,
        };

        let response = self.engine.fetch(&fetch_request).await?;
        debug!(
            "Fetched {} with status {} in {}ms",
            url, response.status_code, response.response_time_ms
        );
        if response.is_error_status() {
            return Err(ScrapeError::HttpStatus {
                status: response.status_code,
            });
        }

        self.check_content_type(response.content_type.as_deref())?;

        ExtractionService::extract(
            &response.content,
            request.selectors.as_ref(),
            self.max_links,
        )
    }

    /// 开启 `reject_non_html` 时拒绝明确声明为非 HTML 的响应；
    /// 未声明内容类型的响应仍按 HTML 解析
    fn check_content_type(&self, content_type: Option<&str>) -> Result<(), ScrapeError> {
        if !self.reject_non_html {
            return Ok(());
        }
        match content_type {
            Some(ct) if !is_html(ct) => Err(ScrapeError::UnsupportedContentType {
                content_type: ct.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn is_html(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}

#[cfg(test)]
#[path = "scrape_service_test.rs"]
mod tests;
