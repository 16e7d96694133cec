use std::{env, path::PathBuf};

use crate::error::{AppError, AppResult};

pub struct AppConfig {
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn new() -> anyhow::Result<Self> {
        let path = env::var_os("CATALOG_PATH").map(PathBuf::from);
        let first_reservation_id = first_reservation_id(env::var("RESERVATION_ID_START").ok())?;
        let catalog = CatalogConfig {
            path,
            first_reservation_id,
        };
        Ok(Self { catalog })
    }
}

// 未設定なら 1 から採番する
fn first_reservation_id(value: Option<String>) -> AppResult<u32> {
    match value {
        None => Ok(1),
        Some(v) => v
            .trim()
            .parse::<u32>()
            .map_err(|e| AppError::ConfigError(format!("RESERVATION_ID_START ({v}): {e}"))),
    }
}

pub struct CatalogConfig {
    // None ならサンプルの客室一覧を使う
    pub path: Option<PathBuf>,
    pub first_reservation_id: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            first_reservation_id: 1,
        }
    }
}
