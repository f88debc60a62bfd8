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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 默认 User-Agent
///
/// 请求未携带自定义请求头时使用
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 应用程序配置设置
///
/// 启动时加载一次，之后只读，通过 `Arc<Settings>` 传递给各组件
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取配置
    pub scraper: ScraperSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 单个批次的最大并发数
    pub max_concurrency: usize,
    /// 请求未指定时的默认超时时间（秒）
    pub default_timeout_secs: u64,
    /// 请求未指定请求头时使用的 User-Agent
    pub user_agent: String,
    /// 默认提取中保留的最大链接数
    pub max_links: usize,
    /// 是否拒绝非 HTML 的响应内容
    pub reject_non_html: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            scraper: ScraperSettings::default(),
        }
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
            default_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_links: 50,
            reject_non_html: false,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并代码默认值、配置文件和 `BATCHSCRAPE__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default scraper settings
            .set_default("scraper.max_concurrency", 10)?
            .set_default("scraper.default_timeout_secs", 10)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("scraper.max_links", 50)?
            .set_default("scraper.reject_non_html", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("BATCHSCRAPE").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置取值
    fn validate(&self) -> Result<(), ConfigError> {
        if self.scraper.max_concurrency == 0 {
            return Err(ConfigError::Message(
                "scraper.max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.scraper.default_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "scraper.default_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
