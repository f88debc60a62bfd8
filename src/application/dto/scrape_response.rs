// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::scrape_result::{ExtractedData, ScrapeResult, ScrapeStatus};

/// 抓取结果数据传输对象
///
/// 批量响应中的一项，与请求中的URL一一对应
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeResponseDto {
    /// 请求中提交的URL
    pub url: String,
    /// "success" 或 "error"
    pub status: ScrapeStatus,
    /// 提取出的数据，仅在成功时存在
    pub data: Option<ExtractedData>,
    /// 错误信息，仅在失败时存在
    pub error: Option<String>,
    /// 耗时（秒）
    pub time_taken: f64,
}

impl From<ScrapeResult> for ScrapeResponseDto {
    fn from(result: ScrapeResult) -> Self {
        Self {
            url: result.url,
            status: result.status,
            data: result.data,
            error: result.error,
            time_taken: result.time_taken,
        }
    }
}

/// 欢迎信息
#[derive(Debug, Deserialize, Serialize)]
pub struct WelcomeResponseDto {
    pub message: String,
    pub usage: String,
}

impl Default for WelcomeResponseDto {
    fn default() -> Self {
        Self {
            message: "Welcome to the Website Scraper API".to_string(),
            usage: "Send a POST request to /scrape with a list of URLs".to_string(),
        }
    }
}
