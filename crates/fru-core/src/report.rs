//! EOL 比對報告與解析警告

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::PartIdentifier;

/// 解析警告類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseWarningKind {
    /// 欄位數不足
    TooFewColumns,
    /// 最後欄位為佔位符號
    PlaceholderIdentifier,
    /// 最後欄位不符合 FRU 型號格式
    PatternMismatch,
}

/// 解析警告（非致命，該列略過）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 行號
    pub line_number: usize,
    /// 原始內容
    pub line: String,
    /// 類型
    pub kind: ParseWarningKind,
}

/// EOL 比對報告
///
/// 序列化欄位名稱沿用 analyse_inventory 工具的 JSON 格式。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EolReport {
    /// 各 EOL 料號的出現次數（僅含次數 >= 1）
    #[serde(rename = "eol_list")]
    pub matched_counts: BTreeMap<PartIdentifier, usize>,

    /// EOL 元件總數（含重複）
    #[serde(rename = "total_eol_components")]
    pub total_matched_instances: usize,

    /// 比對到的料號（依首次出現順序，不重複）
    #[serde(rename = "eol_parts_found")]
    pub matched_identifiers: Vec<PartIdentifier>,

    /// 所有擷取到的料號（可重複）
    #[serde(rename = "fru_list")]
    pub all_extracted_parts: Vec<PartIdentifier>,

    /// EOL 目錄來源
    #[serde(rename = "eol_url")]
    pub source_url: Option<String>,
}

impl EolReport {
    /// 是否有任何 EOL 元件
    pub fn has_eol_parts(&self) -> bool {
        self.total_matched_instances > 0
    }

    /// 查詢某料號的出現次數
    pub fn count_of(&self, part: &str) -> usize {
        self.matched_counts.get(part).copied().unwrap_or(0)
    }

    /// 建構器模式：設置來源網址
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}
