//! [`EventStore`] / [`PreferenceStore`] backed by the SQLite connection.

use crate::db::pool::DbPool;
use crate::db::{prefs, queries};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::preferences::Preferences;
use crate::store::{EventStore, PreferenceStore};
use chrono::NaiveDate;
use tracing::{debug, error};

impl EventStore for DbPool {
    fn all_events(&self) -> AppResult<Vec<Event>> {
        queries::load_all_events(&self.conn)
    }

    fn event_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        queries::load_event_by_id(&self.conn, id)
    }

    fn events_by_date(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        queries::load_events_by_date(&self.conn, &date)
    }

    fn event_by_date_and_type(
        &self,
        date: NaiveDate,
        kind: EventType,
    ) -> AppResult<Option<Event>> {
        queries::load_event_by_date_and_type(&self.conn, &date, kind)
    }

    fn events_by_type(&self, kind: EventType) -> AppResult<Vec<Event>> {
        queries::load_events_by_type(&self.conn, kind)
    }

    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Event>> {
        queries::load_events_between(&self.conn, &start, &end)
    }

    fn insert_event(&mut self, event: &Event) -> AppResult<i64> {
        let id = queries::insert_event(&self.conn, event).inspect_err(|e| {
            error!(date = %event.date, kind = %event.kind, error = %e, "insert failed");
        })?;
        debug!(id, date = %event.date, kind = %event.kind, "event inserted");
        Ok(id)
    }

    fn update_event(&mut self, event: &Event) -> AppResult<()> {
        queries::update_event(&self.conn, event).inspect_err(|e| {
            error!(id = event.id, error = %e, "update failed");
        })?;
        debug!(id = event.id, kind = %event.kind, "event updated");
        Ok(())
    }

    fn delete_event(&mut self, id: i64) -> AppResult<()> {
        queries::delete_event(&self.conn, id)?;
        debug!(id, "event deleted");
        Ok(())
    }

    fn replace_event(&mut self, remove_id: i64, replacement: &Event) -> AppResult<i64> {
        let tx = self.conn.transaction()?;
        let id = if replacement.is_persisted() {
            queries::update_event(&tx, replacement)?;
            replacement.id
        } else {
            queries::insert_event(&tx, replacement)?
        };
        queries::delete_event(&tx, remove_id)?;
        tx.commit()?;

        debug!(id, removed = remove_id, "event replaced");
        Ok(id)
    }
}

impl PreferenceStore for DbPool {
    fn preferences(&self) -> AppResult<Option<Preferences>> {
        prefs::load_preferences(&self.conn)
    }

    fn save_preferences(&mut self, p: &Preferences) -> AppResult<()> {
        prefs::save_preferences(&self.conn, p)
    }
}
