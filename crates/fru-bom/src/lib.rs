//! # FRU BOM Engine
//!
//! BOM 可行性計算（需求、缺料、可生產數量）

pub mod capacity;
pub mod planner;

// Re-export 主要類型
pub use capacity::max_producible_units;
pub use planner::BomPlanner;
