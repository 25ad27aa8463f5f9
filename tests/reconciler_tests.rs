use chrono::NaiveDate;
use rtotracker::core::reconciler::{AddOutcome, AttendanceStatus, REMOTE_FROM_VACATION, Reconciler};
use rtotracker::db::pool::DbPool;
use rtotracker::errors::{AppError, AppResult};
use rtotracker::models::event::Event;
use rtotracker::models::event_type::EventType;
use rtotracker::models::preferences::Preferences;
use rtotracker::models::window::QuarterWindow;
use rtotracker::store::{EventStore, PreferenceStore};

mod common;
use common::{d, memory_pool};

fn count_type(pool: &DbPool, kind: EventType) -> usize {
    pool.events_by_type(kind).unwrap().len()
}

// ---------------------------------------------------------------------
// AddEvent
// ---------------------------------------------------------------------

#[test]
fn add_vacation_twice_updates_description_in_place() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    let first = rec.add_event(Event::vacation(d(2024, 10, 14), "Trip")).unwrap();
    let id = match first {
        AddOutcome::Inserted(id) => id,
        other => panic!("unexpected outcome {other:?}"),
    };

    let second = rec.add_event(Event::vacation(d(2024, 10, 14), "Beach trip")).unwrap();
    assert_eq!(second, AddOutcome::VacationUpdated(id));

    let stored = rec.event_by_id(id).unwrap();
    assert_eq!(stored.description, "Beach trip");
    drop(rec);
    assert_eq!(count_type(&pool, EventType::Vacation), 1);
}

#[test]
fn add_attendance_never_duplicates() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    let first = rec.add_event(Event::attendance(d(2024, 10, 15), true)).unwrap();
    let id = first.event_id().unwrap();

    let again = rec.add_event(Event::attendance(d(2024, 10, 15), false)).unwrap();
    assert_eq!(again, AddOutcome::AlreadyPresent(id));
    assert!(!again.is_mutation());

    // first value kept
    assert!(rec.event_by_id(id).unwrap().is_in_office);
    drop(rec);
    assert_eq!(count_type(&pool, EventType::Attendance), 1);
}

#[test]
fn add_on_holiday_is_skipped() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    rec.add_event(Event::holiday(d(2024, 12, 25), "Christmas")).unwrap();

    assert_eq!(
        rec.add_event(Event::vacation(d(2024, 12, 25), "Off")).unwrap(),
        AddOutcome::SkippedHoliday
    );
    assert_eq!(
        rec.add_event(Event::attendance(d(2024, 12, 25), true)).unwrap(),
        AddOutcome::SkippedHoliday
    );

    let on_day = rec.events_by_date(d(2024, 12, 25)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert!(on_day[0].kind.is_holiday());
}

#[test]
fn add_vacation_converts_existing_attendance() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    let att = rec
        .add_event(Event::attendance(d(2024, 10, 16), true))
        .unwrap()
        .event_id()
        .unwrap();

    let out = rec.add_event(Event::vacation(d(2024, 10, 16), "Sick")).unwrap();
    assert_eq!(out, AddOutcome::AttendanceConverted(att));

    let ev = rec.event_by_id(att).unwrap();
    assert_eq!(ev.kind, EventType::Vacation);
    assert_eq!(ev.description, "Sick");
    assert!(!ev.is_in_office);
}

#[test]
fn holidays_are_inserted_and_never_in_office() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    let mut h = Event::holiday(d(2024, 11, 28), "Thanksgiving");
    h.is_in_office = true;
    let id = rec.add_event(h).unwrap().event_id().unwrap();

    assert!(!rec.event_by_id(id).unwrap().is_in_office);
}

// ---------------------------------------------------------------------
// BulkAddEvents
// ---------------------------------------------------------------------

#[test]
fn bulk_add_classifies_each_date() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    rec.add_event(Event::holiday(d(2024, 10, 14), "Holiday")).unwrap();
    rec.add_event(Event::vacation(d(2024, 10, 15), "Old")).unwrap();
    rec.add_event(Event::attendance(d(2024, 10, 16), true)).unwrap();

    let batch: Vec<Event> = (14..=17)
        .map(|day| Event::vacation(d(2024, 10, day), "Vacation"))
        .collect();
    let resp = rec.bulk_add_events(&batch).unwrap();

    assert!(resp.success);
    assert_eq!((resp.added, resp.updated, resp.skipped, resp.failed), (1, 2, 1, 0));

    let actions: Vec<&str> = resp.results.iter().map(|r| r.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Skipped (Holiday exists)",
            "Updated existing vacation",
            "Transformed attendance to vacation",
            "Added new vacation",
        ]
    );
    assert_eq!(
        resp.message,
        "Successfully added 1 vacation event(s). Successfully updated 2 event(s). \
         Skipped 1 event(s) due to existing holidays."
    );

    // holiday date untouched
    let on_holiday = rec.events_by_date(d(2024, 10, 14)).unwrap();
    assert_eq!(on_holiday.len(), 1);
    assert!(on_holiday[0].kind.is_holiday());
}

#[test]
fn bulk_add_twice_reports_updates() {
    let mut pool = memory_pool();
    let batch = vec![
        Event::vacation(d(2024, 11, 4), "PTO"),
        Event::vacation(d(2024, 11, 5), "PTO"),
    ];

    let first = Reconciler::new(&mut pool).bulk_add_events(&batch).unwrap();
    assert_eq!(first.added, 2);

    let second = Reconciler::new(&mut pool).bulk_add_events(&batch).unwrap();
    assert_eq!(second.added, 0);
    assert_eq!(second.updated, 2);
    assert!(
        second
            .results
            .iter()
            .all(|r| r.action == "Updated existing vacation")
    );

    assert_eq!(count_type(&pool, EventType::Vacation), 2);
}

#[test]
fn bulk_add_rejects_non_vacation_before_touching_store() {
    let mut pool = memory_pool();
    let batch = vec![
        Event::vacation(d(2024, 11, 4), "PTO"),
        Event::attendance(d(2024, 11, 5), true),
    ];

    let err = Reconciler::new(&mut pool).bulk_add_events(&batch).unwrap_err();
    assert!(err.is_validation());
    assert!(pool.all_events().unwrap().is_empty());
}

#[test]
fn bulk_add_empty_list() {
    let mut pool = memory_pool();
    let resp = Reconciler::new(&mut pool).bulk_add_events(&[]).unwrap();
    assert!(resp.success);
    assert!(resp.results.is_empty());
    assert_eq!(resp.message, "No vacation events to process.");
}

/// Store wrapper whose lookups fail for one date and whose writes can be
/// switched to fail.
struct FlakyStore {
    inner: DbPool,
    broken: NaiveDate,
    fail_insert: bool,
    fail_delete: bool,
}

impl FlakyStore {
    fn new(inner: DbPool) -> Self {
        Self {
            inner,
            broken: d(1970, 1, 1),
            fail_insert: false,
            fail_delete: false,
        }
    }
}

impl EventStore for FlakyStore {
    fn all_events(&self) -> AppResult<Vec<Event>> {
        self.inner.all_events()
    }
    fn event_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        self.inner.event_by_id(id)
    }
    fn events_by_date(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        if date == self.broken {
            return Err(AppError::Other("disk on fire".into()));
        }
        self.inner.events_by_date(date)
    }
    fn event_by_date_and_type(&self, date: NaiveDate, kind: EventType) -> AppResult<Option<Event>> {
        self.inner.event_by_date_and_type(date, kind)
    }
    fn events_by_type(&self, kind: EventType) -> AppResult<Vec<Event>> {
        self.inner.events_by_type(kind)
    }
    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Event>> {
        self.inner.events_between(start, end)
    }
    fn insert_event(&mut self, event: &Event) -> AppResult<i64> {
        if self.fail_insert {
            return Err(AppError::Other("insert refused".into()));
        }
        self.inner.insert_event(event)
    }
    fn update_event(&mut self, event: &Event) -> AppResult<()> {
        self.inner.update_event(event)
    }
    fn delete_event(&mut self, id: i64) -> AppResult<()> {
        if self.fail_delete {
            return Err(AppError::Other("delete refused".into()));
        }
        self.inner.delete_event(id)
    }
}

impl PreferenceStore for FlakyStore {
    fn preferences(&self) -> AppResult<Option<Preferences>> {
        self.inner.preferences()
    }
    fn save_preferences(&mut self, prefs: &Preferences) -> AppResult<()> {
        self.inner.save_preferences(prefs)
    }
}

#[test]
fn bulk_add_keeps_going_after_a_failed_date() {
    let mut store = FlakyStore {
        broken: d(2024, 10, 22),
        ..FlakyStore::new(memory_pool())
    };

    let batch: Vec<Event> = (21..=23)
        .map(|day| Event::vacation(d(2024, 10, day), "PTO"))
        .collect();
    let resp = Reconciler::new(&mut store).bulk_add_events(&batch).unwrap();

    assert!(resp.success);
    assert_eq!(resp.added, 2);
    assert_eq!(resp.failed, 1);
    assert_eq!(resp.failed_dates(), vec!["2024-10-22"]);
    assert_eq!(resp.results[1].error, "Error fetching events for this date.");
    assert!(
        resp.message
            .ends_with("Failed to process events on dates: 2024-10-22.")
    );
    assert_eq!(store.inner.all_events().unwrap().len(), 2);
}

// ---------------------------------------------------------------------
// AddDefaultDays
// ---------------------------------------------------------------------

#[test]
fn default_days_fill_weekdays_using_preferences() {
    let mut pool = memory_pool();
    // Mon 2024-10-07 .. Sun 2024-10-13
    let week = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 13)).unwrap();

    let added = Reconciler::new(&mut pool).add_default_days(&week).unwrap();
    assert_eq!(added, 5);

    let events = pool.events_between(week.start, week.end).unwrap();
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e.kind.is_attendance()));

    // default preferences: T,W,Th,F in office, Monday remote
    let monday = pool
        .event_by_date_and_type(d(2024, 10, 7), EventType::Attendance)
        .unwrap()
        .unwrap();
    assert!(!monday.is_in_office);
    assert_eq!(events.iter().filter(|e| e.is_in_office).count(), 4);

    // no weekend rows
    assert!(pool.events_by_date(d(2024, 10, 12)).unwrap().is_empty());
    assert!(pool.events_by_date(d(2024, 10, 13)).unwrap().is_empty());
}

#[test]
fn default_days_skip_occupied_dates_and_are_idempotent() {
    let mut pool = memory_pool();
    let week = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 13)).unwrap();

    {
        let mut rec = Reconciler::new(&mut pool);
        rec.add_event(Event::holiday(d(2024, 10, 8), "Local holiday"))
            .unwrap();
        rec.add_event(Event::vacation(d(2024, 10, 9), "Off")).unwrap();
        assert_eq!(rec.add_default_days(&week).unwrap(), 3);
        assert_eq!(rec.add_default_days(&week).unwrap(), 0);
    }

    assert_eq!(pool.events_between(week.start, week.end).unwrap().len(), 5);
    assert!(
        pool.event_by_date_and_type(d(2024, 10, 8), EventType::Attendance)
            .unwrap()
            .is_none()
    );
}

#[test]
fn default_days_follow_updated_preferences() {
    let mut pool = memory_pool();
    let week = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 11)).unwrap();

    let mut rec = Reconciler::new(&mut pool);
    rec.update_preferences("m, w", "2").unwrap();
    rec.add_default_days(&week).unwrap();

    let office: Vec<NaiveDate> = rec
        .events_between(&week)
        .unwrap()
        .into_iter()
        .filter(|e| e.is_in_office)
        .map(|e| e.date)
        .collect();
    assert_eq!(office, vec![d(2024, 10, 7), d(2024, 10, 9)]);
}

// ---------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------

#[test]
fn preferences_created_on_first_use() {
    let mut pool = memory_pool();
    assert!(pool.preferences().unwrap().is_none());

    let prefs = Reconciler::new(&mut pool).preferences().unwrap();
    assert_eq!(prefs, Preferences::default());
    assert_eq!(pool.preferences().unwrap(), Some(Preferences::default()));
}

#[test]
fn preferences_seed_can_be_overridden() {
    let mut pool = memory_pool();
    let seed = Preferences::validated("M,T", "3").unwrap();
    let prefs = Reconciler::new(&mut pool)
        .with_initial_preferences(seed.clone())
        .preferences()
        .unwrap();
    assert_eq!(prefs, seed);
}

#[test]
fn update_preferences_validates_input() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    assert!(matches!(
        rec.update_preferences("M,Funday", "2.5"),
        Err(AppError::InvalidWeekday(_))
    ));
    assert!(rec.update_preferences("M", "lots").unwrap_err().is_validation());
    assert!(rec.update_preferences("M", "-1").unwrap_err().is_validation());

    let p = rec.update_preferences("th,TH,f", "3.0").unwrap();
    assert_eq!(p.default_days, "Th,F");
    assert_eq!(p.target_days, "3.0");
}

// ---------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------

#[test]
fn toggle_flips_and_twice_restores() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    rec.add_event(Event::attendance(d(2024, 10, 10), false)).unwrap();

    assert_eq!(
        rec.toggle_attendance(d(2024, 10, 10)).unwrap(),
        AttendanceStatus::InOffice
    );
    assert_eq!(
        rec.toggle_attendance(d(2024, 10, 10)).unwrap(),
        AttendanceStatus::Remote
    );
    assert_eq!(AttendanceStatus::Remote.as_str(), "remote");
    assert_eq!(AttendanceStatus::InOffice.as_str(), "in");

    let ev = rec
        .events_by_date(d(2024, 10, 10))
        .unwrap()
        .pop()
        .unwrap();
    assert!(!ev.is_in_office);
}

#[test]
fn toggle_without_attendance_is_not_found() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    rec.add_event(Event::vacation(d(2024, 10, 10), "Off")).unwrap();

    let err = rec.toggle_attendance(d(2024, 10, 10)).unwrap_err();
    assert!(err.is_not_found());
}

// ---------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------

#[test]
fn transform_vacation_creates_remote_day() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    let vac = rec
        .add_event(Event::vacation(d(2024, 11, 12), "PTO"))
        .unwrap()
        .event_id()
        .unwrap();

    let att = rec.transform_vacation_to_remote(vac).unwrap();

    assert!(rec.event_by_id(vac).unwrap_err().is_not_found());
    let remote = rec.event_by_id(att).unwrap();
    assert_eq!(remote.kind, EventType::Attendance);
    assert!(!remote.is_in_office);
    assert_eq!(remote.description, REMOTE_FROM_VACATION);
    assert_eq!(remote.date, d(2024, 11, 12));
}

#[test]
fn transform_rejects_non_vacation_and_unknown_ids() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    let att = rec
        .add_event(Event::attendance(d(2024, 11, 12), true))
        .unwrap()
        .event_id()
        .unwrap();

    assert!(matches!(
        rec.transform_vacation_to_remote(att),
        Err(AppError::Forbidden(_))
    ));
    assert!(rec.transform_vacation_to_remote(9999).unwrap_err().is_not_found());
    assert!(rec.event_by_id(att).unwrap().is_in_office);
}

fn store_with_vacation(date: NaiveDate) -> (FlakyStore, i64) {
    let mut store = FlakyStore::new(memory_pool());
    let id = store.inner.insert_event(&Event::vacation(date, "PTO")).unwrap();
    (store, id)
}

#[test]
fn transform_keeps_vacation_when_remote_day_cannot_be_written() {
    let (mut store, vac) = store_with_vacation(d(2024, 10, 14));
    store.fail_insert = true;

    assert!(Reconciler::new(&mut store).transform_vacation_to_remote(vac).is_err());

    let left = store.inner.events_by_date(d(2024, 10, 14)).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, vac);
    assert_eq!(left[0].kind, EventType::Vacation);
}

#[test]
fn transform_undoes_remote_day_when_vacation_delete_fails() {
    let (mut store, vac) = store_with_vacation(d(2024, 10, 14));
    store.fail_delete = true;

    assert!(Reconciler::new(&mut store).transform_vacation_to_remote(vac).is_err());

    let left = store.inner.events_by_date(d(2024, 10, 14)).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].kind, EventType::Vacation);
}

#[test]
fn sqlite_replace_rolls_back_when_delete_misses() {
    let mut pool = memory_pool();
    let remote = Event::new(d(2024, 10, 14), EventType::Attendance, REMOTE_FROM_VACATION, false);

    assert!(pool.replace_event(4242, &remote).unwrap_err().is_not_found());
    assert!(pool.events_by_date(d(2024, 10, 14)).unwrap().is_empty());
}

#[test]
fn transform_through_wrapper_matches_sqlite_store() {
    let (mut store, vac) = store_with_vacation(d(2024, 10, 14));

    let att = Reconciler::new(&mut store)
        .transform_vacation_to_remote(vac)
        .unwrap();

    let left = store.inner.events_by_date(d(2024, 10, 14)).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, att);
    assert_eq!(left[0].description, REMOTE_FROM_VACATION);
}

// ---------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------

#[test]
fn delete_only_removes_vacations() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);

    let vac = rec
        .add_event(Event::vacation(d(2024, 12, 23), "Xmas break"))
        .unwrap()
        .event_id()
        .unwrap();
    let hol = rec
        .add_event(Event::holiday(d(2024, 12, 25), "Christmas"))
        .unwrap()
        .event_id()
        .unwrap();
    let att = rec
        .add_event(Event::attendance(d(2024, 12, 20), true))
        .unwrap()
        .event_id()
        .unwrap();

    let deleted = rec.delete_event(vac).unwrap();
    assert_eq!(deleted.id, vac);
    assert!(rec.event_by_id(vac).unwrap_err().is_not_found());

    for id in [hol, att] {
        assert!(matches!(rec.delete_event(id), Err(AppError::Forbidden(_))));
        assert!(rec.event_by_id(id).is_ok());
    }

    assert!(rec.delete_event(vac).unwrap_err().is_not_found());
}

#[test]
fn deletable_event_checks_kind_without_deleting() {
    let mut pool = memory_pool();
    let mut rec = Reconciler::new(&mut pool);
    let hol = rec
        .add_event(Event::holiday(d(2024, 12, 25), "Christmas"))
        .unwrap()
        .event_id()
        .unwrap();
    let vac = rec
        .add_event(Event::vacation(d(2024, 12, 23), "Xmas break"))
        .unwrap()
        .event_id()
        .unwrap();

    assert!(matches!(rec.deletable_event(hol), Err(AppError::Forbidden(_))));
    assert_eq!(rec.deletable_event(vac).unwrap().id, vac);
    assert!(rec.event_by_id(vac).is_ok());
    assert!(rec.deletable_event(777).unwrap_err().is_not_found());
}
