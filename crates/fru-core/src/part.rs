//! 料號與庫存清單列模型

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// 料號（FRU 型號、零件號或 CLEI 碼）
///
/// 非空、已去除首尾空白，保留原始大小寫。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartIdentifier(String);

impl PartIdentifier {
    /// 建立料號，空白字串回傳 `None`
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PartIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PartIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PartIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PartIdentifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| "料號不可為空".to_string())
    }
}

impl From<PartIdentifier> for String {
    fn from(value: PartIdentifier) -> Self {
        value.0
    }
}

/// 硬體清單中的一列（已切分為欄位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine<'a> {
    /// 行號（從 1 開始）
    pub line_number: usize,

    /// 原始內容
    pub raw: &'a str,

    /// 以空白切分的欄位
    pub tokens: Vec<&'a str>,
}

impl<'a> InventoryLine<'a> {
    /// 切分一行文字
    pub fn tokenize(line_number: usize, raw: &'a str) -> Self {
        Self {
            line_number,
            raw,
            tokens: raw.split_whitespace().collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first_token(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// 最後一個欄位即 FRU 型號候選
    pub fn last_token(&self) -> Option<&'a str> {
        self.tokens.last().copied()
    }

    pub fn column_count(&self) -> usize {
        self.tokens.len()
    }
}
