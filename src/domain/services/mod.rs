// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 批量分发（batch_dispatcher）：有界并发地分发整批URL并按顺序汇总
/// - 提取服务（extraction_service）：处理内容提取和数据解析逻辑
/// - 抓取服务（scrape_service）：处理单个网页的抓取逻辑
pub mod batch_dispatcher;
pub mod extraction_service;
pub mod scrape_service;
