//! 性質測試

use fru_audit::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::cell::Cell;
use std::collections::HashSet;

/// 硬體清單中的一列：資料列、表頭、佔位列或雜訊
fn inventory_line() -> impl Strategy<Value = String> {
    prop_oneof![
        ("[A-Z][a-z]{2,8}", 0u8..4, "[0-9]{3}-[0-9]{6}", "[A-Z0-9]{10}", "[A-Z0-9]{2,6}-[A-Z0-9-]{1,10}")
            .prop_map(|(item, slot, pn, clei, fru)| format!("{item} {slot}   REV 01   {pn}  {clei}  {fru}")),
        ("[A-Z][a-z]{2,8}", "[0-9]{3}-[0-9]{6}", prop_oneof![Just("-"), Just("N/A"), Just("n/a")])
            .prop_map(|(item, pn, placeholder)| format!("{item} REV 01 {pn} {placeholder}")),
        Just("Hardware inventory:".to_string()),
        Just("Item  Version  Part number  CLEI code  FRU model number".to_string()),
        Just(String::new()),
        "[ -~]{0,40}",
    ]
}

fn inventory_text() -> impl Strategy<Value = String> {
    prop::collection::vec(inventory_line(), 0..30).prop_map(|lines| lines.join("\n"))
}

fn part_list() -> impl Strategy<Value = Vec<PartIdentifier>> {
    prop::collection::vec(
        prop_oneof![Just("CHAS-MX104-S"), Just("PWR-MX104-DC-S"), Just("RE-S-MX104"), Just("SCB-MX960")],
        0..20,
    )
    .prop_map(|ids| ids.into_iter().filter_map(PartIdentifier::new).collect())
}

fn catalog() -> impl Strategy<Value = EolCatalog> {
    prop::collection::vec(
        prop_oneof![Just("CHAS-MX104-S"), Just("RE-S-MX104"), Just("MX80-T")],
        0..4,
    )
    .prop_map(|ids| ids.into_iter().filter_map(PartIdentifier::new).collect())
}

struct CountingLedger {
    inner: InMemoryLedger,
    lookups: Cell<usize>,
}

impl StockLedger for CountingLedger {
    fn get(&self, item_id: &str) -> Result<StockItem> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.get(item_id)
    }

    fn list(&self, category: Option<&str>) -> Vec<StockItem> {
        self.inner.list(category)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_extraction_is_deterministic(text in inventory_text()) {
        prop_assert_eq!(extract_parts(&text), extract_parts(&text));
    }

    #[test]
    fn prop_extraction_never_returns_placeholders(text in inventory_text()) {
        for part in extract_parts(&text) {
            prop_assert_ne!(part.as_str(), "-");
            prop_assert!(!part.as_str().eq_ignore_ascii_case("N/A"));
            prop_assert!(!part.as_str().is_empty());
            prop_assert_eq!(part.as_str().trim(), part.as_str());
        }
    }

    #[test]
    fn prop_match_totals_are_consistent(parts in part_list(), catalog in catalog()) {
        let report = match_eol(&parts, &catalog);

        prop_assert_eq!(report.total_matched_instances, report.matched_counts.values().sum::<usize>());
        prop_assert_eq!(&report.all_extracted_parts, &parts);

        let distinct: HashSet<_> = parts.iter().collect();
        for (part, count) in &report.matched_counts {
            prop_assert!(*count >= 1);
            prop_assert!(catalog.contains(part.as_str()));
            prop_assert!(distinct.contains(part));
            prop_assert_eq!(*count, parts.iter().filter(|p| *p == part).count());
        }
    }

    #[test]
    fn prop_non_positive_units_rejected_without_lookups(
        units in i64::MIN..=0,
        per_unit in 0i64..100,
    ) {
        let ledger = CountingLedger {
            inner: InMemoryLedger::from_items(vec![StockItem::new(
                "001".to_string(),
                "Widget A".to_string(),
                "components".to_string(),
                Decimal::from(150),
                "pieces".to_string(),
            )])
            .unwrap(),
            lookups: Cell::new(0),
        };
        let request = BomRequest::new("Gadget")
            .with_component("001", Decimal::from(per_unit))
            .with_units(units);

        let result = plan_bom(&request, &ledger);

        prop_assert!(matches!(result, Err(FruError::InvalidRequest(_))));
        prop_assert_eq!(ledger.lookups.get(), 0);
    }

    #[test]
    fn prop_shortage_matches_stock(
        available in 0i64..10_000,
        per_unit in 0i64..100,
        units in 1i64..500,
    ) {
        let ledger = InMemoryLedger::from_items(vec![StockItem::new(
            "003".to_string(),
            "Screw M5".to_string(),
            "fasteners".to_string(),
            Decimal::from(available),
            "pieces".to_string(),
        )])
        .unwrap();
        let request = BomRequest::new("Gadget")
            .with_component("003", Decimal::from(per_unit))
            .with_units(units);

        let report = plan_bom(&request, &ledger).unwrap();
        let line = &report.per_component[0];
        let required = per_unit * units;

        prop_assert_eq!(line.required, Some(Decimal::from(required)));
        prop_assert_eq!(line.shortage, Some(Decimal::from((required - available).max(0))));
        prop_assert_eq!(line.sufficient, required <= available);
        prop_assert_eq!(report.overall_feasible, required <= available);
    }
}
