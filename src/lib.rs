//! # FRU Audit
//!
//! 路由器硬體清單 EOL 稽核與 BOM 可行性計算
//!
//! 對外提供四個純函式（不做任何網路或檔案 I/O）：
//! [`extract_parts`]、[`parse_eol_catalog`]、[`match_eol`]、[`plan_bom`]。
//! 下載 EOL 頁面、連線設備等工作由呼叫端負責。

pub mod analysis;
pub mod logging;
pub mod settings;

pub use analysis::{
    analyse_inventory, extract_parts, list_inventory, match_eol, parse_eol_catalog, plan_bom,
    InventoryAnalyzer, InventoryListing, DEFAULT_EOL_URL,
};
pub use logging::init_logging;
pub use settings::{LoggingSettings, Settings};

pub use fru_core::{
    BomComponentRequest, BomLine, BomReport, BomRequest, EolCatalog, EolReport, FruError,
    InMemoryLedger, MatchMode, ParseWarning, PartIdentifier, PlanWarning, Result, StockItem,
    StockLedger, WarningSeverity,
};
