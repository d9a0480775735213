//! 日誌初始化（供宿主程式呼叫）

use anyhow::Result;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::LoggingSettings;

/// 初始化 tracing
///
/// `RUST_LOG` 優先於設定檔中的等級；重複初始化回傳錯誤而不會 panic。
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &settings.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    match (settings.format.as_str(), file) {
        ("json", Some(file)) => registry
            .with(fmt::layer().json().with_writer(Mutex::new(file)))
            .try_init()?,
        ("json", None) => registry.with(fmt::layer().json()).try_init()?,
        (_, Some(file)) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?,
        (_, None) => registry.with(fmt::layer()).try_init()?,
    }

    tracing::info!("日誌已初始化，等級: {}", settings.level);
    Ok(())
}
