//! 可生產數量計算

use fru_core::BomLine;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 以現有庫存計算最多可生產的單位數
///
/// 取各元件 `floor(可用 / 每單位用量)` 的最小值。每單位用量為零的元件不受限制。
/// 有未知物料、沒有元件，或所有元件都不受限制時回傳 `None`。
pub fn max_producible_units(lines: &[BomLine]) -> Option<u64> {
    if lines.is_empty() || lines.iter().any(BomLine::is_unknown) {
        return None;
    }

    lines
        .iter()
        .filter(|line| line.quantity_per_unit > Decimal::ZERO)
        .filter_map(|line| {
            let available = line.available?.max(Decimal::ZERO);
            // 溢位代表實際上不受限制
            available
                .checked_div(line.quantity_per_unit)
                .and_then(|ratio| ratio.floor().to_u64())
        })
        .min()
}
