// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 批量请求（batch_request）：已校验、只读的批次参数
/// - 抓取结果（scrape_result）：每个URL的结果记录与提取数据
pub mod batch_request;
pub mod scrape_result;
