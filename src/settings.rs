//! 執行設定
//!
//! 載入順序：內建預設值 → `config/fru-audit.{toml,json,yaml}`（可省略）→ `FRU_AUDIT__*` 環境變數。

use config::{Config, ConfigError, Environment, File};
use fru_core::MatchMode;
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_EOL_URL;

const DEFAULT_CONFIG_FILE: &str = "config/fru-audit";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// EOL 頁面網址
    pub eol_url: String,

    /// 庫存快照（JSON）路徑
    #[serde(default)]
    pub ledger_snapshot: Option<String>,

    /// 料號比對模式
    pub match_mode: MatchMode,

    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    /// `text` 或 `json`
    pub format: String,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// 指定設定檔路徑（副檔名可省略）
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("eol_url", defaults.eol_url)?
            .set_default("match_mode", "Exact")?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("FRU_AUDIT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            eol_url: DEFAULT_EOL_URL.to_string(),
            ledger_snapshot: None,
            match_mode: MatchMode::Exact,
            logging: LoggingSettings {
                level: "info".to_string(),
                format: "text".to_string(),
                file_path: None,
            },
        }
    }
}
