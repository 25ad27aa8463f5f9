//! Seeding of holidays (and other fixed days) from a JSON file.

use crate::core::reconciler::{AddOutcome, Reconciler};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::store::{EventStore, PreferenceStore};
use crate::utils::date::parse_date;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct RawHoliday {
    pub date: String,
    #[serde(default, alias = "name")]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Attendance rows turned into a seeded vacation.
    pub converted: usize,
    /// Already stored, or a vacation/attendance entry on a holiday.
    pub skipped: usize,
    pub invalid: usize,
    /// Holidays written on a date that already had an attendance row.
    pub over_attendance: usize,
}

pub fn load_holidays_file(path: &Path) -> AppResult<Vec<RawHoliday>> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<RawHoliday> = serde_json::from_str(&content)?;
    Ok(raw)
}

/// Seed every entry whose `date + type` is not already stored.
///
/// Holidays are inserted as they are. Vacation and attendance entries go
/// through [`Reconciler::add_event`], so holiday precedence and the
/// attendance-to-vacation conversion apply. Entries with a bad date or type
/// are counted as invalid and skipped; store errors abort the run.
pub fn seed_holidays<S>(store: &mut S, raw: &[RawHoliday]) -> AppResult<SeedReport>
where
    S: EventStore + PreferenceStore,
{
    let mut rec = Reconciler::new(store);
    let mut report = SeedReport::default();

    for entry in raw {
        let event = match to_event(entry) {
            Ok(ev) => ev,
            Err(e) => {
                warn!(date = %entry.date, error = %e, "invalid holiday entry");
                report.invalid += 1;
                continue;
            }
        };

        let on_date = rec.events_by_date(event.date)?;
        if on_date.iter().any(|e| e.kind == event.kind) {
            debug!(date = %event.date, kind = %event.kind, "already seeded");
            report.skipped += 1;
            continue;
        }

        if event.kind.is_holiday() && on_date.iter().any(|e| e.kind.is_attendance()) {
            // the attendance row is kept and still counts in the stats
            warn!(date = %event.date, name = %event.description, "holiday seeded over an attendance day");
            report.over_attendance += 1;
        }

        match rec.add_event(event.clone())? {
            AddOutcome::Inserted(_) => {
                info!(date = %event.date, kind = %event.kind, name = %event.description, "seeded");
                report.inserted += 1;
            }
            AddOutcome::AttendanceConverted(id) => {
                info!(date = %event.date, id, "attendance converted to seeded vacation");
                report.converted += 1;
            }
            AddOutcome::VacationUpdated(_)
            | AddOutcome::AlreadyPresent(_)
            | AddOutcome::SkippedHoliday => {
                debug!(date = %event.date, kind = %event.kind, "not seeded, date taken");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

fn to_event(entry: &RawHoliday) -> AppResult<Event> {
    let date = parse_date(&entry.date)?;
    let kind = match entry.kind.as_deref() {
        None | Some("") => EventType::Holiday,
        Some(s) => EventType::et_from_str(s).ok_or_else(|| AppError::InvalidEventType(s.into()))?,
    };
    Ok(Event::new(date, kind, &entry.description, false))
}
