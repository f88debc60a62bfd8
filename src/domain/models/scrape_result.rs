// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::errors::ScrapeError;

/// 单个URL的抓取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Error,
}

/// 页面中的链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    /// 链接文本（已去除首尾空白）
    pub text: String,
    /// 原始 href 属性值
    pub href: String,
}

/// 默认提取结果
///
/// 未提供选择器规则时返回的固定四个字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultExtraction {
    /// `<title>` 的文本
    pub title: Option<String>,
    /// `<meta name="description">` 的 content 属性
    pub meta_description: Option<String>,
    /// 所有 `<h1>` 的文本，按文档顺序
    pub h1_tags: Vec<String>,
    /// 带 href 的 `<a>` 元素，按文档顺序截断
    pub links: Vec<LinkInfo>,
}

/// 提取出的数据
///
/// 序列化时不带标签，JSON 形状与字段本身一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedData {
    /// 默认提取
    Default(DefaultExtraction),
    /// 按选择器规则提取：字段名 -> 匹配元素文本列表，字段顺序与规则一致
    Custom(IndexMap<String, Vec<String>>),
}

/// 单个URL的抓取结果
///
/// 每个输入URL对应一条，`data` 仅在成功时存在，`error` 仅在失败时存在，
/// `time_taken` 始终存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// 提交时的URL
    pub url: String,
    /// 抓取状态
    pub status: ScrapeStatus,
    /// 提取出的数据
    pub data: Option<ExtractedData>,
    /// 错误信息
    pub error: Option<String>,
    /// 耗时（秒）
    pub time_taken: f64,
}

impl ScrapeResult {
    /// 创建成功结果
    pub fn success(url: impl Into<String>, data: ExtractedData, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            status: ScrapeStatus::Success,
            data: Some(data),
            error: None,
            time_taken: elapsed.as_secs_f64(),
        }
    }

    /// 创建失败结果
    pub fn failure(url: impl Into<String>, error: &ScrapeError, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            status: ScrapeStatus::Error,
            data: None,
            error: Some(error.to_string()),
            time_taken: elapsed.as_secs_f64(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ScrapeStatus::Success
    }
}
