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

use axum::extract::{rejection::JsonRejection, Extension, Json};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use crate::{
    application::dto::{
        scrape_request::ScrapeBatchRequestDto,
        scrape_response::{ScrapeResponseDto, WelcomeResponseDto},
    },
    config::settings::Settings,
    domain::services::batch_dispatcher::BatchDispatcher,
    presentation::errors::AppError,
};

/// 批量抓取
///
/// 校验失败时返回 400 且不发起任何抓取；否则返回与输入URL一一对应的结果列表
pub async fn scrape(
    Extension(dispatcher): Extension<Arc<BatchDispatcher>>,
    Extension(settings): Extension<Arc<Settings>>,
    payload: Result<Json<ScrapeBatchRequestDto>, JsonRejection>,
) -> Result<Json<Vec<ScrapeResponseDto>>, AppError> {
    let Json(payload) = payload?;

    if let Err(errors) = payload.validate() {
        let err = AppError::from(errors);
        warn!("Rejected scrape request: {}", err);
        return Err(err);
    }

    let request = payload.into_batch_request(&settings.scraper);
    let results = dispatcher.dispatch(request).await;

    Ok(Json(results.into_iter().map(ScrapeResponseDto::from).collect()))
}

/// 欢迎信息
pub async fn welcome() -> Json<WelcomeResponseDto> {
    Json(WelcomeResponseDto::default())
}
