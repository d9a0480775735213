//! EOL 目錄模型

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use crate::{MatchMode, PartIdentifier};

/// 料號在文件中的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogSource {
    /// 內嵌 sw-eol-table 元件的逗號清單
    EmbeddedList,
    /// HTML 表格儲存格
    TableCell,
    /// HTML 連結文字
    LinkText,
}

/// 目錄條目（保留原始文字以便除錯）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 比對到的原始文字
    pub raw_text: String,

    /// 來源
    pub source: CatalogSource,

    /// 連結網址（若為連結文字）
    pub href: Option<String>,
}

/// EOL 料號目錄
///
/// 每次分析時重新建立，不跨請求保存。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EolCatalog {
    entries: BTreeMap<PartIdentifier, CatalogEntry>,
}

impl EolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入料號，已存在時保留第一次出現的條目
    ///
    /// 回傳是否為新料號
    pub fn insert(&mut self, part: PartIdentifier, entry: CatalogEntry) -> bool {
        match self.entries.entry(part) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// 完全相符查詢
    pub fn contains(&self, part: &str) -> bool {
        self.entries.contains_key(part)
    }

    /// 依比對模式查詢
    pub fn contains_with(&self, part: &str, mode: MatchMode) -> bool {
        self.find_with(part, mode).is_some()
    }

    /// 依比對模式取得目錄中的料號（目錄本身的寫法）
    pub fn find_with(&self, part: &str, mode: MatchMode) -> Option<&PartIdentifier> {
        let exact = self.entries.get_key_value(part).map(|(known, _)| known);
        match mode {
            MatchMode::Exact => exact,
            MatchMode::CaseInsensitive => exact.or_else(|| {
                self.entries
                    .keys()
                    .find(|known| known.as_str().eq_ignore_ascii_case(part))
            }),
        }
    }

    pub fn entry(&self, part: &str) -> Option<&CatalogEntry> {
        self.entries.get(part)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 依字母順序列出料號
    pub fn identifiers(&self) -> impl Iterator<Item = &PartIdentifier> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PartIdentifier, &CatalogEntry)> {
        self.entries.iter()
    }
}

impl FromIterator<PartIdentifier> for EolCatalog {
    fn from_iter<T: IntoIterator<Item = PartIdentifier>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for part in iter {
            let entry = CatalogEntry {
                raw_text: part.to_string(),
                source: CatalogSource::EmbeddedList,
                href: None,
            };
            catalog.insert(part, entry);
        }
        catalog
    }
}
