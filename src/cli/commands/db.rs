use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success};
use std::path::Path;

/// Maintenance actions run in a fixed order: migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !Path::new(&cfg.database).exists() {
        return Err(AppError::NotFound(format!("database {}", cfg.database)));
    }
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Applying pending migrations...");
        run_pending_migrations(&pool.conn)?;
        success("Schema is up to date.");
    }

    if *show_info {
        print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        let verdict: String = pool
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if verdict == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {verdict}"));
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM")?;
        success("Database compacted.");
    }

    Ok(())
}
