//! Audit trail kept in the `log` table and shown by `rtotracker log --print`.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};
use tracing::{debug, warn};

const INSERT_LOG: &str = "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)";

/// Append one audit line stamped with the local time in RFC 3339.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let stamp = Local::now().to_rfc3339();
    conn.prepare_cached(INSERT_LOG)?
        .execute(params![stamp, operation, target, message])?;
    debug!(operation, target, "audit line written");
    Ok(())
}

/// Audit after the fact: the recorded operation already succeeded, so a
/// failed write is reported as a warning and otherwise ignored.
pub fn ttlog_lenient(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warn!(operation, target, error = %e, "failed to write internal log");
    }
}
