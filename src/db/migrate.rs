use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

const UNIQUE_ATTENDANCE_INDEX: &str = "idx_events_one_attendance_per_day";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn index_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='index' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `events` table, its lookup indexes and the one-attendance-per-day guard.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            type         TEXT NOT NULL CHECK(type IN ('holiday','vacation','attendance')),
            in_office    INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date_type ON events(date, type);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_events_one_attendance_per_day
            ON events(date) WHERE type = 'attendance';
        "#,
    )?;
    Ok(())
}

fn create_preferences_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            id           INTEGER PRIMARY KEY CHECK(id = 1),
            default_days TEXT NOT NULL,
            target_days  TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Older databases could hold several attendance rows for the same day.
/// Keep the oldest one per date, then add the unique guard.
fn migrate_unique_attendance_per_day(conn: &Connection) -> Result<()> {
    let version = "20241015_0002_unique_attendance_per_day";

    if migration_applied(conn, version)? || index_exists(conn, UNIQUE_ATTENDANCE_INDEX)? {
        return Ok(());
    }

    warning("Removing duplicate attendance events before adding the per-day guard...");

    let removed = conn.execute(
        "DELETE FROM events
         WHERE type = 'attendance'
           AND id NOT IN (SELECT MIN(id) FROM events WHERE type = 'attendance' GROUP BY date)",
        [],
    )?;

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_events_one_attendance_per_day
            ON events(date) WHERE type = 'attendance';",
    )?;

    mark_applied(
        conn,
        version,
        &format!("Added one-attendance-per-day index ({removed} duplicates removed)"),
    )?;

    success(format!(
        "Migration applied: {} → removed {} duplicate attendance event(s)",
        version, removed
    ));
    Ok(())
}

/// Holidays and vacations are never in-office; older builds did not enforce it.
fn migrate_clear_in_office_on_non_attendance(conn: &Connection) -> Result<()> {
    let version = "20241020_0003_clear_in_office_on_non_attendance";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let fixed = conn.execute(
        "UPDATE events SET in_office = 0 WHERE type <> 'attendance' AND in_office <> 0",
        [],
    )?;

    mark_applied(conn, version, &format!("Normalized in_office on {fixed} row(s)"))?;

    if fixed > 0 {
        success(format!(
            "Migration applied: {} → normalized {} event(s)",
            version, fixed
        ));
    } else {
        debug!(version, "migration applied, nothing to normalize");
    }
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    let events_exists = table_exists(conn, "events")?;
    if !events_exists {
        create_events_table(conn)?;
        info!("created events table");
    }

    if !table_exists(conn, "preferences")? {
        create_preferences_table(conn)?;
        info!("created preferences table");
    }

    // 3) Versioned upgrades for databases created by older builds
    if events_exists {
        migrate_unique_attendance_per_day(conn)?;
    }
    migrate_clear_in_office_on_non_attendance(conn)?;

    Ok(())
}
