//! # FRU Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod catalog;
pub mod config;
pub mod part;
pub mod report;
pub mod stock;

// Re-export 主要類型
pub use bom::{BomComponentRequest, BomLine, BomReport, BomRequest, PlanWarning, WarningSeverity};
pub use catalog::{CatalogEntry, CatalogSource, EolCatalog};
pub use config::{CatalogConfig, ExtractorConfig, MatchMode};
pub use part::{InventoryLine, PartIdentifier};
pub use report::{EolReport, ParseWarning, ParseWarningKind};
pub use stock::{InMemoryLedger, StockItem, StockLedger, StockSnapshot};

/// FRU 稽核錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FruError {
    #[error("EOL 目錄不可用 ({source_url}): {reason}")]
    CatalogUnavailable { source_url: String, reason: String },

    #[error("無效的請求: {0}")]
    InvalidRequest(String),

    #[error("找不到庫存物料: {0}")]
    ItemNotFound(String),

    #[error("無效的庫存快照: {0}")]
    InvalidSnapshot(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

impl FruError {
    /// 建立目錄不可用錯誤（下載失敗或解析不到任何料號）
    pub fn catalog_unavailable(source_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CatalogUnavailable {
            source_url: source_url.into(),
            reason: reason.into(),
        }
    }

    /// 是否為目錄不可用
    pub fn is_catalog_unavailable(&self) -> bool {
        matches!(self, Self::CatalogUnavailable { .. })
    }
}

impl From<serde_json::Error> for FruError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidSnapshot(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FruError>;
