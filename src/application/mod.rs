// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求/响应的数据传输对象，负责 API 与领域模型之间的转换
pub mod dto;
