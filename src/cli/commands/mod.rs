pub mod add;
pub mod backup;
pub mod bulk;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod db;
pub mod defaults;
pub mod del;
pub mod export;
pub mod holidays;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod prefs;
pub mod stats;
pub mod toggle;
pub mod transform;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::window::QuarterWindow;
use crate::utils::date::{parse_date, today};
use std::path::Path;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    if !Path::new(&cfg.database).exists() {
        return Err(AppError::NotFound(format!(
            "database {} (run `rtotracker init` first)",
            cfg.database
        )));
    }
    let pool = DbPool::new(&cfg.database)?;
    crate::db::initialize::init_db(&pool.conn)?;
    Ok(pool)
}

/// Window from `--start/--end`, each falling back to the configured bound.
pub(crate) fn resolve_window(
    cfg: &Config,
    start: Option<&str>,
    end: Option<&str>,
) -> AppResult<QuarterWindow> {
    let base = cfg.quarter_window(today())?;
    let start = start.map(parse_date).transpose()?.unwrap_or(base.start);
    let end = end.map(parse_date).transpose()?.unwrap_or(base.end);
    QuarterWindow::new(start, end)
}
