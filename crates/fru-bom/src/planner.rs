//! BOM 可行性計算器

use fru_core::{
    BomLine, BomReport, BomRequest, FruError, PlanWarning, StockItem, StockLedger,
};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::capacity::max_producible_units;

/// BOM 可行性計算器
pub struct BomPlanner;

impl BomPlanner {
    /// 計算 BOM 可行性
    ///
    /// 生產數量不是正整數時，在查詢庫存之前就回傳 [`FruError::InvalidRequest`]。
    /// 找不到的物料不會中止計算，而是記錄在 `unknown_item_ids`，且整體判定為不可行。
    pub fn plan<L>(request: &BomRequest, ledger: &L) -> fru_core::Result<BomReport>
    where
        L: StockLedger + ?Sized,
    {
        Self::validate(request)?;

        tracing::info!(
            "開始 BOM 計算：{}，元件 {} 項，生產 {} 單位",
            request.product_name,
            request.components.len(),
            request.units_to_produce
        );

        let units = Decimal::from(request.units_to_produce);
        let mut report = BomReport {
            product_name: request.product_name.clone(),
            units_to_produce: request.units_to_produce,
            per_component: Vec::with_capacity(request.components.len()),
            overall_feasible: false,
            unknown_item_ids: Vec::new(),
            max_producible_units: None,
            warnings: Vec::new(),
        };

        let mut seen = HashSet::new();

        for component in &request.components {
            if !seen.insert(component.item_id.as_str()) {
                report.add_warning(PlanWarning::info(
                    component.item_id.clone(),
                    "物料重複出現，各列獨立計算".to_string(),
                ));
            }

            let line = match ledger.get(&component.item_id) {
                Ok(item) => {
                    let required = component.quantity_per_unit * units;
                    Self::evaluate(&item, component.quantity_per_unit, required, &mut report)
                }
                Err(FruError::ItemNotFound(item_id)) => {
                    tracing::debug!("庫存中找不到物料: {}", item_id);
                    report.unknown_item_ids.push(item_id.clone());
                    report.add_warning(PlanWarning::error(
                        item_id,
                        "庫存中找不到此物料".to_string(),
                    ));
                    BomLine {
                        item_id: component.item_id.clone(),
                        item_name: None,
                        quantity_per_unit: component.quantity_per_unit,
                        required: None,
                        available: None,
                        shortage: None,
                        sufficient: false,
                        unit: None,
                    }
                }
                Err(other) => return Err(other),
            };

            report.per_component.push(line);
        }

        report.overall_feasible = report.unknown_item_ids.is_empty()
            && report.per_component.iter().all(|line| line.sufficient);
        report.max_producible_units = max_producible_units(&report.per_component);

        tracing::info!(
            "BOM 計算完成：可行 = {}，缺料 {} 項，未知物料 {} 項",
            report.overall_feasible,
            report.shortages().count(),
            report.unknown_item_ids.len()
        );

        Ok(report)
    }

    /// 驗證請求（不觸及庫存帳）
    pub fn validate(request: &BomRequest) -> fru_core::Result<()> {
        if request.units_to_produce <= 0 {
            return Err(FruError::InvalidRequest(format!(
                "生產數量必須為正整數: {}",
                request.units_to_produce
            )));
        }

        let units = Decimal::from(request.units_to_produce);
        for component in &request.components {
            if component.quantity_per_unit < Decimal::ZERO {
                return Err(FruError::InvalidRequest(format!(
                    "物料 {} 的每單位用量不可為負: {}",
                    component.item_id, component.quantity_per_unit
                )));
            }
            if component.quantity_per_unit.checked_mul(units).is_none() {
                return Err(FruError::InvalidRequest(format!(
                    "物料 {} 的總需求數量溢位",
                    component.item_id
                )));
            }
        }

        Ok(())
    }

    fn evaluate(
        item: &StockItem,
        quantity_per_unit: Decimal,
        required: Decimal,
        report: &mut BomReport,
    ) -> BomLine {
        let shortage = item.shortage_for(required);
        let sufficient = shortage == Decimal::ZERO;

        if !sufficient {
            tracing::warn!(
                "物料 {} 缺料：需要 {}，可用 {}，缺 {}",
                item.id,
                required,
                item.quantity_available,
                shortage
            );
            report.add_warning(PlanWarning::warning(
                item.id.clone(),
                format!("需要 {required} {}，可用 {}，缺 {shortage}", item.unit, item.quantity_available),
            ));
        }

        BomLine {
            item_id: item.id.clone(),
            item_name: Some(item.name.clone()),
            quantity_per_unit,
            required: Some(required),
            available: Some(item.quantity_available),
            shortage: Some(shortage),
            sufficient,
            unit: Some(item.unit.clone()),
        }
    }
}
