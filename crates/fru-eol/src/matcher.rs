//! EOL 比對

use fru_core::{EolCatalog, EolReport, MatchMode, PartIdentifier};
use std::collections::BTreeMap;

/// EOL 比對器
#[derive(Debug, Clone, Copy, Default)]
pub struct EolMatcher {
    mode: MatchMode,
}

impl EolMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// 比對擷取到的料號與 EOL 目錄
    ///
    /// 重複的料號逐一計數：`total_matched_instances` 代表實際安裝的 EOL 元件數量，
    /// 而非 EOL 型號種類數。
    pub fn match_parts(&self, parts: &[PartIdentifier], catalog: &EolCatalog) -> EolReport {
        let mut matched_counts: BTreeMap<PartIdentifier, usize> = BTreeMap::new();
        let mut matched_identifiers = Vec::new();

        for part in parts {
            // 以目錄中的寫法計數，忽略大小寫時同一型號只佔一個鍵
            let Some(known) = catalog.find_with(part.as_str(), self.mode) else {
                continue;
            };

            let count = matched_counts.entry(known.clone()).or_insert(0);
            if *count == 0 {
                matched_identifiers.push(known.clone());
            }
            *count += 1;
        }

        let total_matched_instances: usize = matched_counts.values().sum();

        tracing::info!(
            "EOL 比對完成：料號 {} 筆，EOL 元件 {} 個（{} 種）",
            parts.len(),
            total_matched_instances,
            matched_identifiers.len()
        );

        EolReport {
            matched_counts,
            total_matched_instances,
            matched_identifiers,
            all_extracted_parts: parts.to_vec(),
            source_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(ids: &[&str]) -> Vec<PartIdentifier> {
        ids.iter().map(|s| PartIdentifier::new(s).unwrap()).collect()
    }

    fn catalog(ids: &[&str]) -> EolCatalog {
        parts(ids).into_iter().collect()
    }

    #[test]
    fn test_duplicates_are_counted() {
        let extracted = parts(&["CHAS-MX104-S", "PWR-MX104-DC-S", "CHAS-MX104-S"]);
        let report = EolMatcher::default().match_parts(&extracted, &catalog(&["CHAS-MX104-S"]));

        assert_eq!(report.matched_counts.len(), 1);
        assert_eq!(report.count_of("CHAS-MX104-S"), 2);
        assert_eq!(report.total_matched_instances, 2);
        assert_eq!(report.matched_identifiers, parts(&["CHAS-MX104-S"]));
        assert_eq!(report.all_extracted_parts, extracted);
    }

    #[test]
    fn test_matched_identifiers_follow_first_appearance() {
        let extracted = parts(&["SCB-MX960", "RE-S-1800X4", "FPC-MX104", "SCB-MX960"]);
        let report = EolMatcher::default()
            .match_parts(&extracted, &catalog(&["FPC-MX104", "SCB-MX960", "MX5-T-DC"]));

        assert_eq!(report.matched_identifiers, parts(&["SCB-MX960", "FPC-MX104"]));
        assert_eq!(report.total_matched_instances, 3);
        assert_eq!(report.count_of("MX5-T-DC"), 0);
        assert!(!report.matched_counts.contains_key("MX5-T-DC"));
    }

    #[test]
    fn test_no_matches_is_valid_empty_report() {
        let extracted = parts(&["RE-S-1800X4"]);
        let report = EolMatcher::default().match_parts(&extracted, &catalog(&["SCB-MX960"]));

        assert!(!report.has_eol_parts());
        assert!(report.matched_counts.is_empty());
        assert_eq!(report.all_extracted_parts.len(), 1);
    }

    #[test]
    fn test_exact_mode_is_case_sensitive() {
        let extracted = parts(&["chas-mx104-s"]);
        let eol = catalog(&["CHAS-MX104-S"]);

        let exact = EolMatcher::default().match_parts(&extracted, &eol);
        assert_eq!(exact.total_matched_instances, 0);

        let folded = EolMatcher::new(MatchMode::CaseInsensitive).match_parts(&extracted, &eol);
        assert_eq!(folded.count_of("CHAS-MX104-S"), 1);
    }

    #[test]
    fn test_case_insensitive_counts_under_catalog_identifier() {
        let extracted = parts(&["chas-mx104-s", "CHAS-MX104-S", "Chas-Mx104-S", "RE-S-1800X4"]);
        let eol = catalog(&["CHAS-MX104-S"]);

        let report = EolMatcher::new(MatchMode::CaseInsensitive).match_parts(&extracted, &eol);

        assert_eq!(report.matched_counts.len(), 1);
        assert_eq!(report.count_of("CHAS-MX104-S"), 3);
        assert_eq!(report.total_matched_instances, 3);
        assert_eq!(report.matched_identifiers, parts(&["CHAS-MX104-S"]));
        assert!(report.matched_counts.keys().all(|k| eol.contains(k.as_str())));
        assert_eq!(report.all_extracted_parts, extracted);
    }
}
