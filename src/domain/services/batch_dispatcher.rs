// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::models::batch_request::BatchRequest;
use crate::domain::models::scrape_result::ScrapeResult;
use crate::domain::services::scrape_service::ScrapeService;
use crate::utils::errors::ScrapeError;

/// 批量分发器
///
/// 为每个URL启动一个独立任务，通过批次内的信号量限制并发，
/// 按提交顺序汇总结果。单个URL失败不会影响其他URL
#[derive(Clone)]
pub struct BatchDispatcher {
    scrape_service: Arc<ScrapeService>,
    max_concurrency: usize,
}

impl BatchDispatcher {
    /// 创建新的批量分发器
    ///
    /// # 参数
    ///
    /// * `scrape_service` - 单URL抓取服务
    /// * `max_concurrency` - 单个批次的并发上限
    pub fn new(scrape_service: Arc<ScrapeService>, max_concurrency: usize) -> Self {
        Self {
            scrape_service,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// 批次的并发数：min(并发上限, URL数量)
    pub fn concurrency_for(&self, url_count: usize) -> usize {
        self.max_concurrency.min(url_count).max(1)
    }

    /// 分发并等待整个批次完成
    ///
    /// # 返回值
    ///
    /// 与输入URL一一对应、顺序一致的结果列表
    pub async fn dispatch(&self, request: BatchRequest) -> Vec<ScrapeResult> {
        if request.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let permits = self.concurrency_for(request.len());
        let semaphore = Arc::new(Semaphore::new(permits));
        let request = Arc::new(request);

        info!(
            "Dispatching batch of {} URLs with concurrency {}",
            request.len(),
            permits
        );

        // Set once the task holds its permit
        let task_starts: Vec<Arc<OnceLock<Instant>>> = request
            .urls
            .iter()
            .map(|_| Arc::new(OnceLock::new()))
            .collect();

        let handles = request
            .urls
            .iter()
            .cloned()
            .zip(task_starts.iter().cloned())
            .map(|(url, task_start)| {
                let semaphore = Arc::clone(&semaphore);
                let service = Arc::clone(&self.scrape_service);
                let request = Arc::clone(&request);
                tokio::spawn(async move {
                    // Acquisition only fails on a closed semaphore
                    let _permit = semaphore.acquire_owned().await.ok();
                    let _ = task_start.set(Instant::now());
                    service.scrape_one(&url, &request).await
                })
            })
            .collect::<Vec<JoinHandle<ScrapeResult>>>();

        // Handles are awaited in submission order, so slot i always belongs to URL i
        let results: Vec<ScrapeResult> = join_all(handles)
            .await
            .into_iter()
            .zip(request.urls.iter().zip(task_starts.iter()))
            .map(|(joined, (url, task_start))| match joined {
                Ok(result) => result,
                Err(e) => {
                    error!("Scrape task for {} failed: {}", url, e);
                    let err = ScrapeError::TaskFailed {
                        detail: e.to_string(),
                    };
                    let elapsed = task_start
                        .get()
                        .map(Instant::elapsed)
                        .unwrap_or(Duration::ZERO);
                    ScrapeResult::failure(url.as_str(), &err, elapsed)
                }
            })
            .collect();

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        info!(
            "Batch finished in {:.3}s: {} succeeded, {} failed",
            started.elapsed().as_secs_f64(),
            succeeded,
            results.len() - succeeded
        );

        results
    }
}

#[cfg(test)]
#[path = "batch_dispatcher_test.rs"]
mod tests;
