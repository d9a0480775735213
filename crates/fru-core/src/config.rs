//! 解析與比對參數配置

use serde::{Deserialize, Serialize};

/// 硬體清單解析參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// 表頭關鍵字（首欄符合即略過整列）
    pub header_keywords: Vec<String>,

    /// 缺欄位時的佔位符號（不可作為料號）
    pub placeholders: Vec<String>,

    /// 有效資料列的最少欄位數（Item, Version, Part number, CLEI/FRU）
    pub min_columns: usize,

    /// 是否要求候選料號符合 FRU 型號格式
    /// - true: 只接受大寫英數並含連字號的型號（預設）
    /// - false: 接受任何非佔位符號的最後欄位
    pub require_fru_pattern: bool,
}

impl ExtractorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            header_keywords: vec!["Hardware".to_string(), "Item".to_string()],
            placeholders: vec!["-".to_string(), "N/A".to_string()],
            min_columns: 4,
            require_fru_pattern: true,
        }
    }

    /// 建構器模式：設置表頭關鍵字
    pub fn with_header_keywords(mut self, keywords: Vec<String>) -> Self {
        self.header_keywords = keywords;
        self
    }

    /// 建構器模式：設置佔位符號
    pub fn with_placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// 建構器模式：設置最少欄位數
    pub fn with_min_columns(mut self, min_columns: usize) -> Self {
        self.min_columns = min_columns;
        self
    }

    /// 建構器模式：設置是否檢查 FRU 格式
    pub fn with_fru_pattern(mut self, required: bool) -> Self {
        self.require_fru_pattern = required;
        self
    }

    /// 檢查首欄是否為表頭關鍵字
    pub fn is_header(&self, first_token: &str) -> bool {
        self.header_keywords.iter().any(|k| k == first_token)
    }

    /// 檢查是否為佔位符號（不分大小寫）
    pub fn is_placeholder(&self, token: &str) -> bool {
        self.placeholders
            .iter()
            .any(|p| p.eq_ignore_ascii_case(token))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// EOL 目錄解析參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 料號最短長度
    pub min_identifier_len: usize,

    /// 料號最長長度
    pub max_identifier_len: usize,

    /// 未找到內嵌元件時，是否將整份文件當作 HTML 表格解析
    pub scan_whole_document: bool,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self {
            min_identifier_len: 3,
            max_identifier_len: 40,
            scan_whole_document: true,
        }
    }

    /// 建構器模式：設置料號長度範圍
    pub fn with_identifier_len(mut self, min: usize, max: usize) -> Self {
        self.min_identifier_len = min;
        self.max_identifier_len = max;
        self
    }

    /// 建構器模式：設置是否掃描整份文件
    pub fn with_scan_whole_document(mut self, scan: bool) -> Self {
        self.scan_whole_document = scan;
        self
    }

    pub fn accepts_len(&self, candidate: &str) -> bool {
        (self.min_identifier_len..=self.max_identifier_len).contains(&candidate.len())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 料號比對模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// 完全相符（區分大小寫）
    #[default]
    Exact,

    /// 忽略 ASCII 大小寫
    CaseInsensitive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_extractor_config() {
        let config = ExtractorConfig::default();

        assert_eq!(config.min_columns, 4);
        assert!(config.require_fru_pattern);
    }

    #[rstest]
    #[case("Hardware", true)]
    #[case("Item", true)]
    #[case("Midplane", false)]
    #[case("PEM", false)]
    #[case("item", false)]
    fn test_default_header_keywords(#[case] first_token: &str, #[case] expected: bool) {
        assert_eq!(ExtractorConfig::default().is_header(first_token), expected);
    }

    #[rstest]
    #[case("-", true)]
    #[case("N/A", true)]
    #[case("n/a", true)]
    #[case("CHAS-MX104-S", false)]
    fn test_placeholder_ignores_case(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(ExtractorConfig::default().is_placeholder(token), expected);
    }

    #[test]
    fn test_extractor_config_builder() {
        let config = ExtractorConfig::new()
            .with_min_columns(2)
            .with_fru_pattern(false)
            .with_header_keywords(vec!["Slot".to_string()]);

        assert_eq!(config.min_columns, 2);
        assert!(!config.require_fru_pattern);
        assert!(config.is_header("Slot"));
        assert!(!config.is_header("Item"));
    }

    #[rstest]
    #[case("A-B", false)]
    #[case("MX-104", true)]
    #[case("MX5-T-DC-X", true)]
    #[case("CHAS-MX104-S-LONG", false)]
    fn test_catalog_config_len_bounds(#[case] candidate: &str, #[case] expected: bool) {
        let config = CatalogConfig::new().with_identifier_len(5, 10);

        assert_eq!(config.accepts_len(candidate), expected);
    }

    #[test]
    fn test_match_mode_default_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }
}
