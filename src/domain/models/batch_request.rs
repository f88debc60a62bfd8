// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::time::Duration;

/// 选择器规则：字段名 -> CSS 选择器，保持请求中的字段顺序
pub type SelectorRules = IndexMap<String, String>;

/// 已校验的批量抓取请求
///
/// 由请求 DTO 转换而来，分发后只读
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// 目标URL，保持提交顺序
    pub urls: Vec<String>,
    /// 选择器规则，None 表示使用默认提取
    pub selectors: Option<SelectorRules>,
    /// 单个请求的超时时间
    pub timeout: Duration,
    /// 请求头
    pub headers: HashMap<String, String>,
}

impl BatchRequest {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
