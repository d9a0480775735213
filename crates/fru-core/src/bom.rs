//! BOM 請求與可行性報告模型

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{FruError, Result};

/// BOM 元件需求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomComponentRequest {
    /// 物料ID
    pub item_id: String,

    /// 每單位產品用量
    #[serde(alias = "quantity_needed")]
    pub quantity_per_unit: Decimal,
}

impl BomComponentRequest {
    pub fn new(item_id: impl Into<String>, quantity_per_unit: Decimal) -> Self {
        Self {
            item_id: item_id.into(),
            quantity_per_unit,
        }
    }
}

fn default_units_to_produce() -> i64 {
    1
}

/// 生產數量：JSON number 可能帶小數點（`5.0`），只接受整數值
fn deserialize_units<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Units {
        Integer(i64),
        Float(f64),
    }

    match Units::deserialize(deserializer)? {
        Units::Integer(units) => Ok(units),
        Units::Float(units)
            if units.is_finite()
                && units.fract() == 0.0
                && units >= i64::MIN as f64
                && units < i64::MAX as f64 =>
        {
            Ok(units as i64)
        }
        Units::Float(units) => Err(serde::de::Error::custom(format!(
            "units_to_produce 必須為整數: {units}"
        ))),
    }
}

/// BOM 請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRequest {
    /// 產品名稱
    pub product_name: String,

    /// 元件清單（保持順序）
    pub components: Vec<BomComponentRequest>,

    /// 生產數量（必須為正整數）
    #[serde(
        default = "default_units_to_produce",
        deserialize_with = "deserialize_units"
    )]
    pub units_to_produce: i64,
}

impl BomRequest {
    /// 創建新的 BOM 請求（生產數量預設為 1）
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            components: Vec::new(),
            units_to_produce: default_units_to_produce(),
        }
    }

    /// 建構器模式：加入元件
    pub fn with_component(mut self, item_id: impl Into<String>, quantity_per_unit: Decimal) -> Self {
        self.components
            .push(BomComponentRequest::new(item_id, quantity_per_unit));
        self
    }

    /// 由工具參數 JSON 建立
    ///
    /// 格式錯誤（含非整數的生產數量）回傳 [`FruError::InvalidRequest`]。
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FruError::InvalidRequest(e.to_string()))
    }

    /// 建構器模式：設置生產數量
    pub fn with_units(mut self, units_to_produce: i64) -> Self {
        self.units_to_produce = units_to_produce;
        self
    }
}

/// 單一元件的計算結果
///
/// 找不到物料時，名稱、需求、可用與缺料欄位皆為 `None`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub item_id: String,
    pub item_name: Option<String>,
    pub quantity_per_unit: Decimal,
    /// 總需求 = 每單位用量 × 生產數量
    pub required: Option<Decimal>,
    pub available: Option<Decimal>,
    /// max(0, 總需求 - 可用)
    pub shortage: Option<Decimal>,
    pub sufficient: bool,
    pub unit: Option<String>,
}

impl BomLine {
    /// 是否為未知物料
    pub fn is_unknown(&self) -> bool {
        self.item_name.is_none()
    }
}

/// BOM 可行性報告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomReport {
    pub product_name: String,
    pub units_to_produce: i64,

    /// 各元件結果（與請求順序一致）
    pub per_component: Vec<BomLine>,

    /// 所有元件足夠且無未知物料
    pub overall_feasible: bool,

    /// 庫存帳中找不到的物料ID
    pub unknown_item_ids: Vec<String>,

    /// 以現有庫存最多可生產數量（有未知物料或無元件時為 `None`）
    pub max_producible_units: Option<u64>,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,
}

impl BomReport {
    /// 缺料的元件
    pub fn shortages(&self) -> impl Iterator<Item = &BomLine> {
        self.per_component
            .iter()
            .filter(|line| line.shortage.is_some_and(|s| s > Decimal::ZERO))
    }

    /// 查詢某物料的第一筆結果
    pub fn line(&self, item_id: &str) -> Option<&BomLine> {
        self.per_component.iter().find(|line| line.item_id == item_id)
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }
}

/// BOM 計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    pub item_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(item_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            item_id,
            message,
            severity,
        }
    }

    pub fn info(item_id: String, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Info)
    }

    pub fn warning(item_id: String, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Warning)
    }

    pub fn error(item_id: String, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = BomRequest::new("Gadget")
            .with_component("001", Decimal::from(2))
            .with_component("003", Decimal::from(10))
            .with_units(5);

        assert_eq!(request.product_name, "Gadget");
        assert_eq!(request.components.len(), 2);
        assert_eq!(request.components[1].item_id, "003");
        assert_eq!(request.units_to_produce, 5);
    }

    #[test]
    fn test_request_from_tool_arguments() {
        // 相容 create_bom 工具的參數格式
        let json = r#"{
            "product_name": "Gadget",
            "components": [{"item_id": "001", "quantity_needed": 2}]
        }"#;

        let request: BomRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.units_to_produce, 1);
        assert_eq!(request.components[0].quantity_per_unit, Decimal::from(2));
    }

    #[test]
    fn test_request_accepts_integral_float_units() {
        let json = r#"{
            "product_name": "Gadget",
            "components": [{"item_id": "001", "quantity_needed": 2}],
            "units_to_produce": 5.0
        }"#;

        let request = BomRequest::from_json(json).unwrap();
        assert_eq!(request.units_to_produce, 5);
    }

    #[test]
    fn test_request_rejects_fractional_units() {
        let json = r#"{"product_name": "Gadget", "components": [], "units_to_produce": 2.5}"#;

        let err = BomRequest::from_json(json).unwrap_err();
        assert!(matches!(err, FruError::InvalidRequest(msg) if msg.contains("units_to_produce")));
    }

    #[test]
    fn test_warning_constructors() {
        let warning = PlanWarning::error("999".to_string(), "missing".to_string());
        assert_eq!(warning.severity, WarningSeverity::Error);
        assert_eq!(
            PlanWarning::info("001".to_string(), String::new()).severity,
            WarningSeverity::Info
        );
    }
}
