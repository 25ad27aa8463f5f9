//! Rule engine deciding how holiday, vacation and attendance events
//! compete for the same calendar day.
//!
//! Precedence on a single date: holiday > vacation > attendance. A holiday
//! date is never touched by vacation/attendance mutations, a vacation
//! absorbs an existing attendance row in place, and there is at most one
//! attendance row per date.

use crate::errors::{AppError, AppResult};
use crate::models::bulk::{BulkAction, BulkAddResponse, BulkAddResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::preferences::Preferences;
use crate::models::window::QuarterWindow;
use crate::store::{EventStore, PreferenceStore};
use crate::utils::date::{format_date, is_weekend};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

pub const REMOTE_FROM_VACATION: &str = "Remote day (transformed from vacation)";

/// Result of [`Reconciler::add_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new row was written.
    Inserted(i64),
    /// A vacation already existed on the date; its description was replaced.
    VacationUpdated(i64),
    /// An attendance row on the date became the vacation.
    AttendanceConverted(i64),
    /// An attendance row already existed on the date; nothing changed.
    AlreadyPresent(i64),
    /// A holiday occupies the date; nothing changed.
    SkippedHoliday,
}

impl AddOutcome {
    pub fn event_id(&self) -> Option<i64> {
        match self {
            AddOutcome::Inserted(id)
            | AddOutcome::VacationUpdated(id)
            | AddOutcome::AttendanceConverted(id)
            | AddOutcome::AlreadyPresent(id) => Some(*id),
            AddOutcome::SkippedHoliday => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            AddOutcome::Inserted(_) => "added",
            AddOutcome::VacationUpdated(_) => "updated existing vacation",
            AddOutcome::AttendanceConverted(_) => "transformed attendance to vacation",
            AddOutcome::AlreadyPresent(_) => "attendance already recorded",
            AddOutcome::SkippedHoliday => "skipped (holiday exists)",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            AddOutcome::AlreadyPresent(_) | AddOutcome::SkippedHoliday
        )
    }
}

/// Attendance status after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    InOffice,
    Remote,
}

impl AttendanceStatus {
    pub fn from_in_office(in_office: bool) -> Self {
        if in_office { Self::InOffice } else { Self::Remote }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::InOffice => "in",
            AttendanceStatus::Remote => "remote",
        }
    }
}

/// How a vacation lands on a date, given what is already there.
enum VacationPlan {
    SkipHoliday,
    UpdateVacation(Event),
    ConvertAttendance(Event),
    Insert,
}

impl VacationPlan {
    fn for_existing(on_date: &[Event]) -> Self {
        if on_date.iter().any(|e| e.kind.is_holiday()) {
            return VacationPlan::SkipHoliday;
        }
        if let Some(v) = on_date.iter().find(|e| e.kind.is_vacation()) {
            return VacationPlan::UpdateVacation(v.clone());
        }
        if let Some(a) = on_date.iter().find(|e| e.kind.is_attendance()) {
            return VacationPlan::ConvertAttendance(a.clone());
        }
        VacationPlan::Insert
    }

    fn failure_message(&self) -> &'static str {
        match self {
            VacationPlan::SkipHoliday => "",
            VacationPlan::UpdateVacation(_) => "Failed to update existing vacation event.",
            VacationPlan::ConvertAttendance(_) => {
                "Failed to transform attendance event to vacation."
            }
            VacationPlan::Insert => "Failed to add vacation event.",
        }
    }
}

pub struct Reconciler<'a, S> {
    store: &'a mut S,
    initial_preferences: Preferences,
}

impl<'a, S> Reconciler<'a, S>
where
    S: EventStore + PreferenceStore,
{
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            initial_preferences: Preferences::default(),
        }
    }

    /// Preferences written the first time the record is read and missing.
    pub fn with_initial_preferences(mut self, prefs: Preferences) -> Self {
        self.initial_preferences = prefs;
        self
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    /// Read the preference record, creating it with defaults on first use.
    pub fn preferences(&mut self) -> AppResult<Preferences> {
        if let Some(p) = self.store.preferences()? {
            return Ok(p);
        }

        let defaults = self.initial_preferences.clone();
        self.store.save_preferences(&defaults)?;
        info!(
            default_days = %defaults.default_days,
            target_days = %defaults.target_days,
            "preferences created with defaults"
        );
        Ok(defaults)
    }

    pub fn update_preferences(
        &mut self,
        default_days: &str,
        target_days: &str,
    ) -> AppResult<Preferences> {
        let prefs = Preferences::validated(default_days, target_days)?;
        self.store.save_preferences(&prefs)?;
        info!(default_days = %prefs.default_days, target_days = %prefs.target_days, "preferences updated");
        Ok(prefs)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn all_events(&self) -> AppResult<Vec<Event>> {
        self.store.all_events()
    }

    pub fn events_by_date(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        self.store.events_by_date(date)
    }

    pub fn events_between(&self, window: &QuarterWindow) -> AppResult<Vec<Event>> {
        self.store.events_between(window.start, window.end)
    }

    pub fn event_by_id(&self, id: i64) -> AppResult<Event> {
        self.store
            .event_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("event {id}")))
    }

    // ------------------------------------------------------------------
    // Single add
    // ------------------------------------------------------------------

    /// Add or merge a single event.
    #[instrument(skip(self, event), fields(date = %event.date, kind = %event.kind))]
    pub fn add_event(&mut self, event: Event) -> AppResult<AddOutcome> {
        let event = event.normalized();

        match event.kind {
            EventType::Holiday => {
                let id = self.store.insert_event(&event)?;
                Ok(AddOutcome::Inserted(id))
            }

            EventType::Vacation => {
                let on_date = self.store.events_by_date(event.date)?;
                let plan = VacationPlan::for_existing(&on_date);
                let (action, id) = self.apply_vacation_plan(plan, &event)?;
                Ok(match (action, id) {
                    (BulkAction::Updated, Some(id)) => AddOutcome::VacationUpdated(id),
                    (BulkAction::Transformed, Some(id)) => AddOutcome::AttendanceConverted(id),
                    (BulkAction::Added, Some(id)) => AddOutcome::Inserted(id),
                    _ => AddOutcome::SkippedHoliday,
                })
            }

            EventType::Attendance => {
                if self
                    .store
                    .event_by_date_and_type(event.date, EventType::Holiday)?
                    .is_some()
                {
                    debug!("holiday on date, attendance not recorded");
                    return Ok(AddOutcome::SkippedHoliday);
                }

                if let Some(existing) = self
                    .store
                    .event_by_date_and_type(event.date, EventType::Attendance)?
                {
                    debug!(id = existing.id, "attendance already recorded");
                    return Ok(AddOutcome::AlreadyPresent(existing.id));
                }

                let id = self.store.insert_event(&event)?;
                Ok(AddOutcome::Inserted(id))
            }
        }
    }

    fn apply_vacation_plan(
        &mut self,
        plan: VacationPlan,
        vacation: &Event,
    ) -> AppResult<(BulkAction, Option<i64>)> {
        match plan {
            VacationPlan::SkipHoliday => Ok((BulkAction::Skipped, None)),

            VacationPlan::UpdateVacation(mut existing) => {
                existing.description = vacation.description.clone();
                self.store.update_event(&existing)?;
                Ok((BulkAction::Updated, Some(existing.id)))
            }

            VacationPlan::ConvertAttendance(mut attendance) => {
                attendance.kind = EventType::Vacation;
                attendance.description = vacation.description.clone();
                attendance.is_in_office = false;
                self.store.update_event(&attendance)?;
                Ok((BulkAction::Transformed, Some(attendance.id)))
            }

            VacationPlan::Insert => {
                let id = self.store.insert_event(vacation)?;
                Ok((BulkAction::Added, Some(id)))
            }
        }
    }

    // ------------------------------------------------------------------
    // Bulk vacation import
    // ------------------------------------------------------------------

    /// Import a list of vacation events, one date at a time.
    ///
    /// A failure on one date is recorded in the result list and does not
    /// abort the batch; the response is still `success = true`.
    pub fn bulk_add_events(&mut self, events: &[Event]) -> AppResult<BulkAddResponse> {
        if let Some(bad) = events.iter().find(|e| !e.kind.is_vacation()) {
            return Err(AppError::Validation(format!(
                "bulk add accepts only vacation events, got {} on {}",
                bad.kind,
                format_date(&bad.date)
            )));
        }

        info!(events = events.len(), "bulk add started");

        let (mut added, mut updated, mut skipped) = (0usize, 0usize, 0usize);
        let mut failed_dates: Vec<String> = Vec::new();
        let mut results: Vec<BulkAddResult> = Vec::with_capacity(events.len());

        for event in events {
            let vacation = event.clone().normalized();
            let date_str = format_date(&vacation.date);

            let on_date = match self.store.events_by_date(vacation.date) {
                Ok(list) => list,
                Err(e) => {
                    error!(date = %date_str, error = %e, "error fetching events by date");
                    failed_dates.push(date_str.clone());
                    results.push(failure(&date_str, "Error fetching events for this date."));
                    continue;
                }
            };

            let plan = VacationPlan::for_existing(&on_date);
            let failure_message = plan.failure_message();

            match self.apply_vacation_plan(plan, &vacation) {
                Ok((action, _)) => {
                    match action {
                        BulkAction::Added => added += 1,
                        BulkAction::Updated | BulkAction::Transformed => updated += 1,
                        BulkAction::Skipped => skipped += 1,
                        BulkAction::Failed => {}
                    }
                    results.push(BulkAddResult {
                        date: date_str,
                        action: action.label().to_string(),
                        description: if action == BulkAction::Skipped {
                            String::new()
                        } else {
                            vacation.description.clone()
                        },
                        error: String::new(),
                    });
                }
                Err(e) => {
                    error!(date = %date_str, error = %e, "{}", failure_message);
                    failed_dates.push(date_str.clone());
                    results.push(failure(&date_str, failure_message));
                }
            }
        }

        let message = summary_message(added, updated, skipped, &failed_dates);
        info!(added, updated, skipped, failed = failed_dates.len(), "bulk add finished");

        Ok(BulkAddResponse {
            success: true,
            added,
            updated,
            skipped,
            failed: failed_dates.len(),
            message,
            results,
        })
    }

    // ------------------------------------------------------------------
    // Default days
    // ------------------------------------------------------------------

    /// Create an attendance event for every Monday–Friday in the window that
    /// has no event at all. Returns the number of inserted events.
    #[instrument(skip(self, window), fields(window = %window))]
    pub fn add_default_days(&mut self, window: &QuarterWindow) -> AppResult<usize> {
        let prefs = self.preferences()?;

        let occupied: HashSet<NaiveDate> = self
            .store
            .events_between(window.start, window.end)?
            .into_iter()
            .map(|e| e.date)
            .collect();

        let mut added = 0usize;
        for day in window.days() {
            if is_weekend(&day) || occupied.contains(&day) {
                continue;
            }

            let in_office = prefs.is_default_office_day(day.weekday());
            self.store.insert_event(&Event::attendance(day, in_office))?;
            added += 1;
        }

        info!(count = added, "default days added");
        Ok(added)
    }

    // ------------------------------------------------------------------
    // Toggle
    // ------------------------------------------------------------------

    /// Flip in-office/remote on the attendance event of `date`.
    #[instrument(skip(self))]
    pub fn toggle_attendance(&mut self, date: NaiveDate) -> AppResult<AttendanceStatus> {
        let mut event = self
            .store
            .event_by_date_and_type(date, EventType::Attendance)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "attendance event on {}",
                    format_date(&date)
                ))
            })?;

        event.is_in_office = !event.is_in_office;
        self.store.update_event(&event)?;

        let status = AttendanceStatus::from_in_office(event.is_in_office);
        info!(id = event.id, status = status.as_str(), "attendance toggled");
        Ok(status)
    }

    // ------------------------------------------------------------------
    // Vacation → remote
    // ------------------------------------------------------------------

    /// Replace a vacation with a remote attendance day on the same date.
    /// Returns the id of the attendance event.
    #[instrument(skip(self))]
    pub fn transform_vacation_to_remote(&mut self, event_id: i64) -> AppResult<i64> {
        let vacation = self.event_by_id(event_id)?;

        if !vacation.kind.is_vacation() {
            return Err(AppError::Forbidden(
                "only vacation events can be transformed into remote days".into(),
            ));
        }

        // an existing attendance row on the date becomes the remote day
        let remote = match self
            .store
            .event_by_date_and_type(vacation.date, EventType::Attendance)?
        {
            Some(mut existing) => {
                existing.is_in_office = false;
                existing.description = REMOTE_FROM_VACATION.to_string();
                existing
            }
            None => Event::new(
                vacation.date,
                EventType::Attendance,
                REMOTE_FROM_VACATION,
                false,
            ),
        };

        let attendance_id = self.store.replace_event(vacation.id, &remote)?;

        info!(vacation_id = event_id, attendance_id, date = %vacation.date, "vacation transformed to remote");
        Ok(attendance_id)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Look up an event and check that it may be deleted: only vacations
    /// can be. Holidays and attendance rows give `Forbidden`.
    pub fn deletable_event(&self, event_id: i64) -> AppResult<Event> {
        let event = self.event_by_id(event_id)?;

        if !event.kind.is_vacation() {
            warn!(id = event.id, kind = %event.kind, "refusing to delete non-vacation event");
            return Err(AppError::Forbidden(format!(
                "only vacation events can be deleted (event {} is {})",
                event.id, event.kind
            )));
        }
        Ok(event)
    }

    /// Delete a vacation event. Holidays and attendance rows are rejected.
    #[instrument(skip(self))]
    pub fn delete_event(&mut self, event_id: i64) -> AppResult<Event> {
        let event = self.deletable_event(event_id)?;

        self.store.delete_event(event.id)?;
        info!(date = %event.date, "vacation deleted");
        Ok(event)
    }
}

fn failure(date: &str, message: &str) -> BulkAddResult {
    BulkAddResult {
        date: date.to_string(),
        action: BulkAction::Failed.label().to_string(),
        description: String::new(),
        error: message.to_string(),
    }
}

fn summary_message(added: usize, updated: usize, skipped: usize, failed: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    if added > 0 {
        parts.push(format!("Successfully added {added} vacation event(s)."));
    }
    if updated > 0 {
        parts.push(format!("Successfully updated {updated} event(s)."));
    }
    if skipped > 0 {
        parts.push(format!("Skipped {skipped} event(s) due to existing holidays."));
    }
    if !failed.is_empty() {
        parts.push(format!(
            "Failed to process events on dates: {}.",
            failed.join(", ")
        ));
    }
    if parts.is_empty() {
        return "No vacation events to process.".to_string();
    }
    parts.join(" ")
}
