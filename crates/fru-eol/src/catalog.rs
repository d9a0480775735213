//! EOL 目錄解析
//!
//! 來源頁面把 EOL 清單放在內嵌的 `sw-eol-table` 元件裡：
//! `{"selector":"sw-eol-table","properties":{"htmlContent":'...'}}`。
//! `htmlContent` 可能是逗號分隔的型號清單，也可能是完整的 HTML 表格。

use fru_core::{CatalogConfig, CatalogEntry, CatalogSource, EolCatalog, FruError, PartIdentifier};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::extractor::is_fru_model;

static EOL_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)\{\s*"selector"\s*:\s*"sw-eol-table"\s*,\s*"properties"\s*:\s*\{[^}]*"htmlContent"\s*:\s*'([^']*)'\s*\}\s*\}"#,
    )
    .expect("sw-eol-table 正規表示式無效")
});

/// 儲存格文字的分隔字元
static CELL_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,;/()\[\]]+").expect("分隔正規表示式無效"));

static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static TH: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static THEAD_ROW: LazyLock<Selector> = LazyLock::new(|| selector("thead tr"));
static TBODY_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("無效的選擇器 {css}: {e}"))
}

/// 表格儲存格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EolTableCell {
    /// 欄位標題
    pub header: String,
    /// 文字（已去除空白）
    pub text: String,
    /// 連結網址
    pub url: Option<String>,
    /// 連結標題
    pub title: Option<String>,
}

/// 表格資料列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EolTableRow {
    pub cells: Vec<EolTableCell>,
}

impl EolTableRow {
    /// 依標題取得儲存格
    pub fn get(&self, header: &str) -> Option<&EolTableCell> {
        self.cells.iter().find(|c| c.header == header)
    }
}

/// EOL 目錄解析器
#[derive(Debug, Clone, Default)]
pub struct EolCatalogParser {
    config: CatalogConfig,
    source_url: Option<String>,
}

impl EolCatalogParser {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            source_url: None,
        }
    }

    /// 建構器模式：設置來源網址（用於錯誤訊息）
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    fn source_label(&self) -> &str {
        self.source_url.as_deref().unwrap_or("(inline document)")
    }

    /// 解析文件為 EOL 目錄
    ///
    /// 一個料號都找不到時回傳 [`FruError::CatalogUnavailable`]，
    /// 讓呼叫端能區分「沒有 EOL 元件」與「目錄無法取得」。
    pub fn parse(&self, document: &str) -> fru_core::Result<EolCatalog> {
        tracing::info!("開始解析 EOL 目錄：{} ({} bytes)", self.source_label(), document.len());

        let mut catalog = EolCatalog::new();
        let components = extract_components(document);
        tracing::debug!("sw-eol-table 元件數量: {}", components.len());

        if components.is_empty() {
            if self.config.scan_whole_document {
                self.collect_markup(&Html::parse_document(document), &mut catalog);
            }
        } else {
            for html_content in &components {
                let fragment = Html::parse_fragment(html_content);
                self.collect_markup(&fragment, &mut catalog);
                self.collect_embedded_list(&fragment, &mut catalog);
            }
        }

        if catalog.is_empty() {
            let reason = if components.is_empty() {
                "文件中找不到 sw-eol-table 元件或任何料號"
            } else {
                "sw-eol-table 元件中沒有可辨識的料號"
            };
            tracing::warn!("EOL 目錄不可用：{} - {}", self.source_label(), reason);
            return Err(FruError::catalog_unavailable(self.source_label(), reason));
        }

        tracing::info!("EOL 目錄解析完成，料號 {} 筆", catalog.len());
        Ok(catalog)
    }

    /// 逗號清單：去除標記後依逗號切段
    ///
    /// 須在 [`Self::collect_markup`] 之後呼叫，表格與連結內的料號才會保留其來源。
    fn collect_embedded_list(&self, fragment: &Html, catalog: &mut EolCatalog) {
        let text = element_text(&fragment.root_element());
        for item in text.split(',') {
            self.collect_candidates(item, CatalogSource::EmbeddedList, None, catalog);
        }
    }

    /// 連結文字（不限於表格內）與表格儲存格
    fn collect_markup(&self, html: &Html, catalog: &mut EolCatalog) {
        for link in html.select(&LINK) {
            let href = link.value().attr("href").map(str::to_string);
            let text = element_text(&link);
            self.collect_candidates(&text, CatalogSource::LinkText, href, catalog);
        }

        for td in html.select(&TD) {
            let text = element_text(&td);
            self.collect_candidates(&text, CatalogSource::TableCell, None, catalog);
        }
    }

    fn collect_candidates(
        &self,
        text: &str,
        source: CatalogSource,
        href: Option<String>,
        catalog: &mut EolCatalog,
    ) {
        for token in CELL_SEPARATORS.split(text) {
            if !self.is_part_number(token) {
                continue;
            }
            let Some(part) = PartIdentifier::new(token) else {
                continue;
            };
            let entry = CatalogEntry {
                raw_text: text.trim().to_string(),
                source,
                href: href.clone(),
            };
            if catalog.insert(part, entry) {
                tracing::trace!("EOL 料號: {} ({:?})", token, source);
            }
        }
    }

    /// 料號格式與長度檢查
    ///
    /// 純數字組合（日期、組件編號）不視為型號。
    pub fn is_part_number(&self, candidate: &str) -> bool {
        self.config.accepts_len(candidate)
            && is_fru_model(candidate)
            && candidate.bytes().any(|b| b.is_ascii_uppercase())
    }
}

/// 擷取所有 sw-eol-table 元件的 htmlContent
pub fn extract_components(document: &str) -> Vec<String> {
    EOL_COMPONENT
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| unescape_script(m.as_str()).into_owned())
        .collect()
}

/// 還原內嵌於 script 中常見的跳脫字元
fn unescape_script(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.replace("\\u003c", "<")
            .replace("\\u003C", "<")
            .replace("\\u003e", ">")
            .replace("\\u003E", ">")
            .replace("\\u0026", "&")
            .replace("\\\"", "\"")
            .replace("\\/", "/"),
    )
}

fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 將 HTML 表格解析為資料列
///
/// 標題取自 `thead` 的第一列（沒有 `thead` 時取第一個含 `th` 的列）；
/// 超出標題數量的儲存格會被捨棄。
pub fn parse_tables(html: &str) -> Vec<EolTableRow> {
    let document = Html::parse_fragment(html);
    let mut rows = Vec::new();

    for table in document.select(&TABLE) {
        let header_row = table
            .select(&THEAD_ROW)
            .next()
            .or_else(|| table.select(&TR).find(|tr| tr.select(&TH).next().is_some()));

        let headers: Vec<String> = header_row
            .map(|tr| tr.select(&TH).map(|th| element_text(&th)).collect())
            .unwrap_or_default();

        if headers.is_empty() {
            continue;
        }

        let body_rows: Vec<ElementRef<'_>> = {
            let tbody: Vec<_> = table.select(&TBODY_ROW).collect();
            if tbody.is_empty() {
                table.select(&TR).collect()
            } else {
                tbody
            }
        };

        for tr in body_rows {
            let cells: Vec<EolTableCell> = tr
                .select(&TD)
                .zip(headers.iter())
                .map(|(td, header)| {
                    let link = td.select(&LINK).next();
                    EolTableCell {
                        header: header.clone(),
                        text: element_text(&td),
                        url: link
                            .as_ref()
                            .map(|a| a.value().attr("href").unwrap_or_default().to_string()),
                        title: link
                            .as_ref()
                            .map(|a| a.value().attr("title").unwrap_or_default().to_string()),
                    }
                })
                .collect();

            if !cells.is_empty() {
                rows.push(EolTableRow { cells });
            }
        }
    }

    rows
}
