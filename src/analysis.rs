//! 分析入口

use fru_bom::BomPlanner;
use fru_core::{
    BomReport, BomRequest, CatalogConfig, EolCatalog, EolReport, ExtractorConfig, FruError,
    MatchMode, PartIdentifier, StockItem, StockLedger,
};
use fru_eol::{EolCatalogParser, EolMatcher, PartExtractor};
use serde::{Deserialize, Serialize};

/// 預設 EOL 頁面（M 系列）
pub const DEFAULT_EOL_URL: &str = "https://support.juniper.net/support/eol/product/m_series/";

/// 從硬體清單擷取料號
pub fn extract_parts(text: &str) -> Vec<PartIdentifier> {
    PartExtractor::default().extract(text)
}

/// 解析 EOL 文件
pub fn parse_eol_catalog(document: &str) -> fru_core::Result<EolCatalog> {
    EolCatalogParser::default().parse(document)
}

/// 比對料號與 EOL 目錄（完全相符）
pub fn match_eol(parts: &[PartIdentifier], catalog: &EolCatalog) -> EolReport {
    EolMatcher::default().match_parts(parts, catalog)
}

/// 計算 BOM 可行性
pub fn plan_bom<L>(request: &BomRequest, ledger: &L) -> fru_core::Result<BomReport>
where
    L: StockLedger + ?Sized,
{
    BomPlanner::plan(request, ledger)
}

/// 一次完成擷取、目錄解析與比對（預設參數）
///
/// `fetched` 為呼叫端下載 EOL 頁面的結果；下載失敗的訊息會轉為
/// [`FruError::CatalogUnavailable`]。
pub fn analyse_inventory(
    hw_inventory: &str,
    fetched: Result<&str, &str>,
    eol_url: &str,
) -> fru_core::Result<EolReport> {
    InventoryAnalyzer::default().analyse(hw_inventory, fetched, eol_url)
}

/// 硬體清單分析器（可調整參數）
#[derive(Debug, Clone, Default)]
pub struct InventoryAnalyzer {
    extractor: PartExtractor,
    catalog_config: CatalogConfig,
    matcher: EolMatcher,
}

impl InventoryAnalyzer {
    pub fn new(extractor: ExtractorConfig, catalog: CatalogConfig, mode: MatchMode) -> Self {
        Self {
            extractor: PartExtractor::new(extractor),
            catalog_config: catalog,
            matcher: EolMatcher::new(mode),
        }
    }

    /// 建構器模式：設置比對模式
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.matcher = EolMatcher::new(mode);
        self
    }

    pub fn analyse(
        &self,
        hw_inventory: &str,
        fetched: Result<&str, &str>,
        eol_url: &str,
    ) -> fru_core::Result<EolReport> {
        let extraction = self.extractor.extract_with_warnings(hw_inventory);

        let document = fetched.map_err(|reason| {
            tracing::warn!(
                "EOL 頁面下載失敗 ({})，已擷取料號 {} 筆未能比對",
                eol_url,
                extraction.parts.len()
            );
            FruError::catalog_unavailable(eol_url, format!("下載失敗: {reason}"))
        })?;

        let catalog = EolCatalogParser::new(self.catalog_config.clone())
            .with_source_url(eol_url)
            .parse(document)?;

        let report = self
            .matcher
            .match_parts(&extraction.parts, &catalog)
            .with_source_url(eol_url);

        Ok(report)
    }
}

/// 庫存清單（get_inventory 工具的輸出格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryListing {
    pub total_items: usize,
    pub items: Vec<StockItem>,
}

/// 列出庫存，可依類別篩選
pub fn list_inventory<L>(ledger: &L, category: Option<&str>) -> InventoryListing
where
    L: StockLedger + ?Sized,
{
    let items = ledger.list(category);
    InventoryListing {
        total_items: items.len(),
        items,
    }
}
