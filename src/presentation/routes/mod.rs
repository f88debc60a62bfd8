// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::batch_dispatcher::BatchDispatcher;
use crate::presentation::handlers::scrape_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载依赖的路由，`/scrape` 需要 `Arc<BatchDispatcher>` 和 `Arc<Settings>` 扩展
pub fn routes() -> Router {
    Router::new()
        .route("/", get(scrape_handler::welcome))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/scrape", post(scrape_handler::scrape))
}

/// 创建完整的应用
///
/// 挂载依赖与请求追踪
pub fn create_app(settings: Arc<Settings>, dispatcher: Arc<BatchDispatcher>) -> Router {
    routes()
        .layer(Extension(dispatcher))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
