//! JSON event import. Every entry goes through the single-add rules.

use crate::core::reconciler::{AddOutcome, Reconciler};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::store::{EventStore, PreferenceStore};
use crate::utils::date::parse_date;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_in_office: bool,
}

impl RawEvent {
    pub fn to_event(&self) -> AppResult<Event> {
        let date = parse_date(&self.date)?;
        let kind = EventType::et_from_str(&self.kind)
            .ok_or_else(|| AppError::InvalidEventType(self.kind.clone()))?;
        Ok(Event::new(date, kind, &self.description, self.is_in_office))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped_holiday: usize,
    /// `(date, reason)` for every entry that could not be imported.
    pub invalid: Vec<(String, String)>,
}

impl ImportReport {
    fn record(&mut self, outcome: AddOutcome) {
        match outcome {
            AddOutcome::Inserted(_) => self.inserted += 1,
            AddOutcome::VacationUpdated(_) | AddOutcome::AttendanceConverted(_) => {
                self.updated += 1
            }
            AddOutcome::AlreadyPresent(_) => self.unchanged += 1,
            AddOutcome::SkippedHoliday => self.skipped_holiday += 1,
        }
    }
}

pub fn load_events_file(path: &Path) -> AppResult<Vec<RawEvent>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn import_events<S>(rec: &mut Reconciler<'_, S>, raw: &[RawEvent]) -> AppResult<ImportReport>
where
    S: EventStore + PreferenceStore,
{
    let mut report = ImportReport::default();

    for entry in raw {
        let event = match entry.to_event() {
            Ok(ev) => ev,
            Err(e) => {
                warn!(date = %entry.date, error = %e, "skipping invalid import entry");
                report.invalid.push((entry.date.clone(), e.to_string()));
                continue;
            }
        };
        let outcome = rec.add_event(event)?;
        report.record(outcome);
    }

    Ok(report)
}
