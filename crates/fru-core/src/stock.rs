//! 庫存模型與庫存帳讀取介面

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{FruError, Result};

/// 庫存物料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// 物料ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 類別
    pub category: String,

    /// 可用數量
    #[serde(alias = "quantity")]
    pub quantity_available: Decimal,

    /// 單位
    pub unit: String,
}

impl StockItem {
    /// 創建新的庫存物料
    pub fn new(
        id: String,
        name: String,
        category: String,
        quantity_available: Decimal,
        unit: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            quantity_available,
            unit,
        }
    }

    /// 可用數量是否足夠
    pub fn covers(&self, required: Decimal) -> bool {
        self.quantity_available >= required
    }

    /// 缺料數量（不足時為正，否則為零）
    pub fn shortage_for(&self, required: Decimal) -> Decimal {
        (required - self.quantity_available).max(Decimal::ZERO)
    }
}

/// 庫存帳（唯讀）
///
/// 任何後端（檔案、資料庫、遠端服務）只要提供 `get` 與 `list` 即可供 BOM 計算使用。
pub trait StockLedger {
    /// 依ID查詢物料
    fn get(&self, item_id: &str) -> Result<StockItem>;

    /// 列出物料，指定類別時只回傳完全相符者；順序固定
    fn list(&self, category: Option<&str>) -> Vec<StockItem>;
}

impl<L: StockLedger + ?Sized> StockLedger for &L {
    fn get(&self, item_id: &str) -> Result<StockItem> {
        (**self).get(item_id)
    }

    fn list(&self, category: Option<&str>) -> Vec<StockItem> {
        (**self).list(category)
    }
}

/// 庫存快照的 JSON 格式：`{"items": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub items: Vec<StockItem>,
}

/// 記憶體內庫存帳（保留插入順序）
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    items: Vec<StockItem>,
    index: HashMap<String, usize>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由物料清單建立，ID 重複時回傳錯誤
    pub fn from_items(items: Vec<StockItem>) -> Result<Self> {
        let mut ledger = Self::new();
        for item in items {
            ledger.insert(item)?;
        }
        Ok(ledger)
    }

    /// 由 JSON 快照建立
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StockSnapshot = serde_json::from_str(json)?;
        tracing::debug!("載入庫存快照：{} 筆物料", snapshot.items.len());
        Self::from_items(snapshot.items)
    }

    /// 新增物料
    pub fn insert(&mut self, item: StockItem) -> Result<()> {
        if self.index.contains_key(&item.id) {
            return Err(FruError::InvalidSnapshot(format!(
                "物料ID重複: {}",
                item.id
            )));
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 匯出為快照
    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            items: self.items.clone(),
        }
    }
}

impl StockLedger for InMemoryLedger {
    fn get(&self, item_id: &str) -> Result<StockItem> {
        self.index
            .get(item_id)
            .map(|&idx| self.items[idx].clone())
            .ok_or_else(|| FruError::ItemNotFound(item_id.to_string()))
    }

    fn list(&self, category: Option<&str>) -> Vec<StockItem> {
        match category {
            Some(category) => self
                .items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect(),
            None => self.items.clone(),
        }
    }
}
