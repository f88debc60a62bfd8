// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use batchscrape::config::settings::Settings;
use batchscrape::domain::services::batch_dispatcher::BatchDispatcher;
use batchscrape::domain::services::scrape_service::ScrapeService;
use batchscrape::engines::reqwest_engine::ReqwestEngine;
use batchscrape::engines::traits::FetchEngine;
use batchscrape::presentation::routes;
use batchscrape::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting batchscrape...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize engine and services
    let engine: Arc<dyn FetchEngine> = Arc::new(ReqwestEngine::new()?);
    info!("Fetch engine '{}' initialized", engine.name());

    let scrape_service = Arc::new(ScrapeService::new(engine, &settings.scraper));
    let dispatcher = Arc::new(BatchDispatcher::new(
        scrape_service,
        settings.scraper.max_concurrency,
    ));

    // 4. Start HTTP server
    let app = routes::create_app(settings.clone(), dispatcher);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
