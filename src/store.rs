//! Storage contracts consumed by the reconciliation engine.
//!
//! The SQLite implementation lives in [`crate::db::store`]; tests can wrap
//! it to inject failures.

use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::preferences::Preferences;
use chrono::NaiveDate;
use tracing::error;

pub trait EventStore {
    fn all_events(&self) -> AppResult<Vec<Event>>;

    fn event_by_id(&self, id: i64) -> AppResult<Option<Event>>;

    fn events_by_date(&self, date: NaiveDate) -> AppResult<Vec<Event>>;

    fn event_by_date_and_type(&self, date: NaiveDate, kind: EventType)
    -> AppResult<Option<Event>>;

    fn events_by_type(&self, kind: EventType) -> AppResult<Vec<Event>>;

    /// Events with `start <= date <= end`, ordered by date.
    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Event>>;

    /// Persist a new event and return the id assigned to it.
    fn insert_event(&mut self, event: &Event) -> AppResult<i64>;

    /// Overwrite every field of the event with the same id.
    fn update_event(&mut self, event: &Event) -> AppResult<()>;

    fn delete_event(&mut self, id: i64) -> AppResult<()>;

    /// Write `replacement` (insert when it has no id yet, update otherwise)
    /// and delete the event `remove_id`, as one unit. Returns the id of the
    /// replacement.
    ///
    /// Backends with transactions should override this. The fallback writes
    /// the replacement first and undoes that write if the delete fails.
    fn replace_event(&mut self, remove_id: i64, replacement: &Event) -> AppResult<i64> {
        let previous = if replacement.is_persisted() {
            self.event_by_id(replacement.id)?
        } else {
            None
        };

        let id = if replacement.is_persisted() {
            self.update_event(replacement)?;
            replacement.id
        } else {
            self.insert_event(replacement)?
        };

        if let Err(e) = self.delete_event(remove_id) {
            let undo = match &previous {
                Some(prev) => self.update_event(prev),
                None => self.delete_event(id),
            };
            if let Err(undo_err) = undo {
                error!(id, error = %undo_err, "could not undo replacement write");
            }
            return Err(e);
        }
        Ok(id)
    }
}

pub trait PreferenceStore {
    fn preferences(&self) -> AppResult<Option<Preferences>>;

    fn save_preferences(&mut self, prefs: &Preferences) -> AppResult<()>;
}
