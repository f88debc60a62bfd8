// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::domain::models::batch_request::SelectorRules;
use crate::domain::models::scrape_result::{DefaultExtraction, ExtractedData, LinkInfo};
use crate::utils::errors::ScrapeError;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).expect("valid selector"));
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// 提取服务
///
/// 负责从 HTML 内容中提取结构化数据。解析后的文档不跨越 await 点，
/// 所有方法均为同步方法
pub struct ExtractionService;

impl ExtractionService {
    /// 提取数据
    ///
    /// 提供了非空的选择器规则时按规则提取，否则执行默认提取
    ///
    /// # 参数
    ///
    /// * `html_content` - 页面内容
    /// * `selectors` - 选择器规则
    /// * `max_links` - 默认提取中保留的最大链接数
    pub fn extract(
        html_content: &str,
        selectors: Option<&SelectorRules>,
        max_links: usize,
    ) -> Result<ExtractedData, ScrapeError> {
        match selectors.filter(|rules| !rules.is_empty()) {
            Some(rules) => {
                // Compile every selector before parsing so a bad rule fails fast
                let compiled = Self::compile(rules)?;
                let document = Html::parse_document(html_content);
                Ok(ExtractedData::Custom(Self::extract_custom(
                    &document, &compiled,
                )))
            }
            None => {
                let document = Html::parse_document(html_content);
                Ok(ExtractedData::Default(Self::extract_default(
                    &document, max_links,
                )))
            }
        }
    }

    /// 编译选择器规则
    fn compile(rules: &SelectorRules) -> Result<Vec<(&str, Selector)>, ScrapeError> {
        rules
            .iter()
            .map(|(field, selector)| {
                Selector::parse(selector)
                    .map(|compiled| (field.as_str(), compiled))
                    .map_err(|_| ScrapeError::InvalidSelector {
                        field: field.clone(),
                        selector: selector.clone(),
                    })
            })
            .collect()
    }

    /// 按选择器规则提取，未匹配的字段得到空列表
    fn extract_custom(
        document: &Html,
        compiled: &[(&str, Selector)],
    ) -> IndexMap<String, Vec<String>> {
        compiled
            .iter()
            .map(|(field, selector)| {
                let values = document.select(selector).map(trimmed_text).collect();
                (field.to_string(), values)
            })
            .collect()
    }

    /// 默认提取：标题、描述、h1 与链接
    pub fn extract_default(document: &Html, max_links: usize) -> DefaultExtraction {
        let title = document
            .select(&TITLE)
            .next()
            .map(|el| el.text().collect::<String>());

        let meta_description = document
            .select(&META_DESCRIPTION)
            .next()
            .map(|el| el.value().attr("content").unwrap_or_default().to_string());

        let h1_tags = document.select(&H1).map(trimmed_text).collect();

        let links = document
            .select(&LINKS)
            .filter_map(|el| {
                el.value().attr("href").map(|href| LinkInfo {
                    text: trimmed_text(el),
                    href: href.to_string(),
                })
            })
            .take(max_links)
            .collect();

        DefaultExtraction {
            title,
            meta_description,
            h1_tags,
            links,
        }
    }
}

/// 元素的文本内容，去除首尾空白
fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
