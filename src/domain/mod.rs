// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：请求参数与结果记录
/// - 服务（services）：抓取、提取与批量分发
///
/// 领域层只依赖抓取引擎的特质，不依赖具体的 HTTP 框架
pub mod models;
pub mod services;
