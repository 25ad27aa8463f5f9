use crate::errors::AppResult;
use crate::models::preferences::Preferences;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_preferences(conn: &Connection) -> AppResult<Option<Preferences>> {
    let mut stmt =
        conn.prepare_cached("SELECT default_days, target_days FROM preferences WHERE id = 1")?;

    let prefs = stmt
        .query_row([], |row| {
            Ok(Preferences {
                default_days: row.get(0)?,
                target_days: row.get(1)?,
            })
        })
        .optional()?;

    Ok(prefs)
}

/// Insert or replace the single preferences row.
pub fn save_preferences(conn: &Connection, prefs: &Preferences) -> AppResult<()> {
    conn.execute(
        "INSERT INTO preferences (id, default_days, target_days, updated_at)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
             default_days = excluded.default_days,
             target_days  = excluded.target_days,
             updated_at   = excluded.updated_at",
        params![prefs.default_days, prefs.target_days, Local::now().to_rfc3339()],
    )?;
    Ok(())
}
