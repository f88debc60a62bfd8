// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use batchscrape::presentation::routes;
use serde_json::Value;
use tower::util::ServiceExt;

use super::helpers::create_test_server;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 欢迎信息测试
#[tokio::test]
async fn welcome_message_is_returned() {
    let server = create_test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Welcome to the Website Scraper API");
    assert!(body["usage"].as_str().unwrap().contains("/scrape"));
}

#[tokio::test]
async fn version_matches_crate() {
    let server = create_test_server();

    let response = server.get("/version").await;
    response.assert_status_ok();
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}
