use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::utils::date::{DATE_FORMAT, format_date};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str = "SELECT id, date, description, type, in_office FROM events";

pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("type")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        date,
        description: row.get("description")?,
        kind,
        is_in_office: row.get::<_, i32>("in_office")? == 1,
    })
}

fn collect_events<P: rusqlite::Params>(conn: &Connection, sql: &str, p: P) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(p, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(conn: &Connection) -> AppResult<Vec<Event>> {
    collect_events(conn, &format!("{SELECT_EVENTS} ORDER BY date ASC, id ASC"), [])
}

pub fn load_event_by_id(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENTS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_events_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!("{SELECT_EVENTS} WHERE date = ?1 ORDER BY id ASC"),
        [format_date(date)],
    )
}

pub fn load_event_by_date_and_type(
    conn: &Connection,
    date: &NaiveDate,
    kind: EventType,
) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_EVENTS} WHERE date = ?1 AND type = ?2 ORDER BY id ASC LIMIT 1"
    ))?;
    Ok(stmt
        .query_row(params![format_date(date), kind.to_db_str()], map_row)
        .optional()?)
}

pub fn load_events_by_type(conn: &Connection, kind: EventType) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!("{SELECT_EVENTS} WHERE type = ?1 ORDER BY date ASC, id ASC"),
        [kind.to_db_str()],
    )
}

/// Dates are stored as zero-padded text, so lexical order is calendar order.
pub fn load_events_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Event>> {
    collect_events(
        conn,
        &format!("{SELECT_EVENTS} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC, id ASC"),
        params![format_date(start), format_date(end)],
    )
}

/// Insert a new event; returns the generated row id.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (date, description, type, in_office, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            format_date(&ev.date),
            ev.description,
            ev.kind.to_db_str(),
            if ev.is_in_office { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an event (all fields except id and created_at).
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE events
         SET date = ?1, description = ?2, type = ?3, in_office = ?4
         WHERE id = ?5",
        params![
            format_date(&ev.date),
            ev.description,
            ev.kind.to_db_str(),
            if ev.is_in_office { 1 } else { 0 },
            ev.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(format!("event {}", ev.id)));
    }
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("event {}", id)));
    }
    Ok(())
}

pub fn count_events_by_type(conn: &Connection) -> AppResult<Vec<(String, i64)>> {
    let mut stmt =
        conn.prepare("SELECT type, COUNT(*) FROM events GROUP BY type ORDER BY type ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
