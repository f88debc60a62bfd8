// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use batchscrape::config::settings::Settings;
use batchscrape::domain::services::batch_dispatcher::BatchDispatcher;
use batchscrape::domain::services::scrape_service::ScrapeService;
use batchscrape::engines::reqwest_engine::ReqwestEngine;
use batchscrape::presentation::routes;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 使用默认配置与真实 reqwest 引擎创建测试服务器
pub fn create_test_server() -> TestServer {
    create_test_server_with(Settings::default())
}

pub fn create_test_server_with(settings: Settings) -> TestServer {
    let settings = Arc::new(settings);
    let engine = Arc::new(ReqwestEngine::new().unwrap());
    let service = Arc::new(ScrapeService::new(engine, &settings.scraper));
    let dispatcher = Arc::new(BatchDispatcher::new(
        service,
        settings.scraper.max_concurrency,
    ));

    TestServer::new(routes::create_app(settings, dispatcher)).unwrap()
}

/// 挂载一个返回 HTML 的页面
pub async fn mount_page(server: &MockServer, route: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.into(), "text/html"))
        .mount(server)
        .await;
}

/// 挂载一个延迟返回的页面
pub async fn mount_slow_page(server: &MockServer, route: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><title>slow</title></html>", "text/html")
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// 挂载一个返回指定状态码的页面
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// 一个没有进程监听的本地地址
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

/// 带标题、描述、两个 h1 和指定数量链接的页面
pub fn fixture_page(link_count: usize) -> String {
    let anchors: String = (0..link_count)
        .map(|i| format!(r#"<li><a href="https://example.com/{i}">Item {i}</a></li>"#))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Fixture Title</title>
    <meta name="description" content="Fixture description">
  </head>
  <body>
    <h1>Alpha</h1>
    <section><h1>  Beta  </h1></section>
    <ul>{anchors}</ul>
  </body>
</html>"#
    )
}
