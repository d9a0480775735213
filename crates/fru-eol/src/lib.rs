//! # FRU EOL Engine
//!
//! 硬體清單解析、EOL 目錄解析與比對

pub mod catalog;
pub mod extractor;
pub mod matcher;

// Re-export 主要類型
pub use catalog::{extract_components, parse_tables, EolCatalogParser, EolTableCell, EolTableRow};
pub use extractor::{is_fru_model, Extraction, PartExtractor};
pub use matcher::EolMatcher;
