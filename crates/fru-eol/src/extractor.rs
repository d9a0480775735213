//! 硬體清單料號擷取

use fru_core::{ExtractorConfig, InventoryLine, ParseWarning, ParseWarningKind, PartIdentifier};
use regex::Regex;
use std::sync::LazyLock;

/// FRU 型號格式：大寫英數，至少一個連字號
static FRU_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]+-[A-Z0-9-]+$").expect("FRU 型號正規表示式無效")
});

/// 檢查是否符合 FRU 型號格式
pub fn is_fru_model(candidate: &str) -> bool {
    FRU_PATTERN.is_match(candidate)
}

/// 擷取結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// 料號（依出現順序，可重複）
    pub parts: Vec<PartIdentifier>,

    /// 略過的資料列
    pub warnings: Vec<ParseWarning>,
}

/// 單列判定結果
enum LineOutcome {
    Part(PartIdentifier),
    Skipped,
    Warning(ParseWarningKind),
}

/// 料號擷取器
///
/// 逐列切分 `show chassis hardware clei-models` 之類的表格輸出，取每列最後一個欄位作為 FRU 型號。
#[derive(Debug, Clone, Default)]
pub struct PartExtractor {
    config: ExtractorConfig,
}

impl PartExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// 擷取料號
    pub fn extract(&self, raw_text: &str) -> Vec<PartIdentifier> {
        self.extract_with_warnings(raw_text).parts
    }

    /// 擷取料號並回傳解析警告
    pub fn extract_with_warnings(&self, raw_text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for (idx, raw) in raw_text.lines().enumerate() {
            let line = InventoryLine::tokenize(idx + 1, raw);

            match self.classify(&line) {
                LineOutcome::Part(part) => extraction.parts.push(part),
                LineOutcome::Skipped => {}
                LineOutcome::Warning(kind) => {
                    tracing::debug!("略過第 {} 列 ({:?}): {}", line.line_number, kind, raw.trim());
                    extraction.warnings.push(ParseWarning {
                        line_number: line.line_number,
                        line: raw.to_string(),
                        kind,
                    });
                }
            }
        }

        tracing::info!(
            "擷取料號 {} 筆，略過 {} 列",
            extraction.parts.len(),
            extraction.warnings.len()
        );

        extraction
    }

    fn classify(&self, line: &InventoryLine<'_>) -> LineOutcome {
        let (Some(first), Some(last)) = (line.first_token(), line.last_token()) else {
            return LineOutcome::Skipped;
        };

        if self.config.is_header(first) {
            return LineOutcome::Skipped;
        }

        if line.column_count() < self.config.min_columns {
            return LineOutcome::Warning(ParseWarningKind::TooFewColumns);
        }

        if self.config.is_placeholder(last) {
            return LineOutcome::Warning(ParseWarningKind::PlaceholderIdentifier);
        }

        if self.config.require_fru_pattern && !is_fru_model(last) {
            return LineOutcome::Warning(ParseWarningKind::PatternMismatch);
        }

        match PartIdentifier::new(last) {
            Some(part) => LineOutcome::Part(part),
            None => LineOutcome::Skipped,
        }
    }
}
