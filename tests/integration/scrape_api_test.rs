// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{
    create_test_server, fixture_page, mount_page, mount_slow_page, mount_status, unreachable_url,
};

/// 空URL列表返回 400
#[tokio::test]
async fn empty_url_list_is_rejected() {
    let server = create_test_server();

    let response = server.post("/scrape").json(&json!({ "urls": [] })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No URLs provided");
}

/// 非法URL返回 400，且不会发起任何请求
#[tokio::test]
async fn invalid_url_is_rejected_before_dispatch() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/page", fixture_page(1)).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({ "urls": [format!("{}/page", upstream.uri()), "not a url"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("invalid URL"));

    let received = upstream.received_requests().await.unwrap();
    assert!(received.is_empty(), "batch must not be dispatched");
}

/// 缺少 urls 字段时由 JSON 解析拒绝
#[tokio::test]
async fn malformed_body_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({ "selectors": { "a": "b" } }))
        .await;

    assert!(response.status_code().is_client_error());
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

/// 结果顺序与输入一致，单个URL失败不影响其他URL
#[tokio::test]
async fn mixed_batch_preserves_order_and_isolates_failures() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/one", fixture_page(2)).await;
    mount_status(&upstream, "/gone", 404).await;
    mount_page(&upstream, "/three", fixture_page(3)).await;

    let urls = vec![
        format!("{}/one", upstream.uri()),
        unreachable_url(),
        format!("{}/gone", upstream.uri()),
        format!("{}/three", upstream.uri()),
    ];

    let server = create_test_server();
    let response = server.post("/scrape").json(&json!({ "urls": urls })).await;
    response.assert_status_ok();

    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), urls.len());
    for (result, url) in results.iter().zip(urls.iter()) {
        assert_eq!(result["url"], url.as_str());
        assert!(result["time_taken"].as_f64().unwrap() >= 0.0);
    }

    assert_eq!(results[0]["status"], "success");
    assert!(results[0]["error"].is_null());

    assert_eq!(results[1]["status"], "error");
    assert!(results[1]["data"].is_null());
    assert!(results[1]["error"]
        .as_str()
        .unwrap()
        .starts_with("Connection error"));

    assert_eq!(results[2]["status"], "error");
    assert_eq!(results[2]["error"], "HTTP error: status code 404");

    assert_eq!(results[3]["status"], "success");
    assert_eq!(results[3]["data"]["links"].as_array().unwrap().len(), 3);
}

/// 超时的URL记录错误，耗时约等于超时时间，其他URL正常完成
#[tokio::test]
async fn slow_url_times_out_without_blocking_batch() {
    let upstream = MockServer::start().await;
    mount_slow_page(&upstream, "/slow", Duration::from_secs(4)).await;
    mount_page(&upstream, "/fast", fixture_page(1)).await;

    let server = create_test_server();
    let response = server
        .post("/scrape")
        .json(&json!({
            "urls": [format!("{}/slow", upstream.uri()), format!("{}/fast", upstream.uri())],
            "timeout": 1
        }))
        .await;
    response.assert_status_ok();

    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["status"], "error");
    assert!(results[0]["error"].as_str().unwrap().contains("timed out"));
    let elapsed = results[0]["time_taken"].as_f64().unwrap();
    assert!((0.9..3.0).contains(&elapsed), "time_taken was {}", elapsed);

    assert_eq!(results[1]["status"], "success");
    assert!(results[1]["time_taken"].as_f64().unwrap() < 1.0);
}

/// 未提供请求头时发送默认 User-Agent
#[tokio::test]
async fn default_user_agent_is_sent() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent"))
        .and(header_regex("user-agent", "^Mozilla/5\\.0 .*Chrome/91"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture_page(0), "text/html"))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = create_test_server();
    let response = server
        .post("/scrape")
        .json(&json!({ "urls": [format!("{}/agent", upstream.uri())] }))
        .await;
    response.assert_status_ok();

    let results: Vec<Value> = response.json();
    assert_eq!(results[0]["status"], "success");
}

/// 自定义请求头替换默认请求头
#[tokio::test]
async fn custom_headers_replace_default() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lang"))
        .and(header("accept-language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture_page(0), "text/html"))
        .mount(&upstream)
        .await;

    let server = create_test_server();
    let response = server
        .post("/scrape")
        .json(&json!({
            "urls": [format!("{}/lang", upstream.uri())],
            "headers": { "Accept-Language": "de" }
        }))
        .await;

    let results: Vec<Value> = response.json();
    assert_eq!(results[0]["status"], "success");
}
