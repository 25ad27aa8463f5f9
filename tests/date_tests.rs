use chrono::Weekday;
use rtotracker::errors::AppError;
use rtotracker::models::event::Event;
use rtotracker::models::event_type::EventType;
use rtotracker::models::preferences::{Preferences, parse_target_days};
use rtotracker::models::window::QuarterWindow;
use rtotracker::utils::date::{
    days_between, is_weekend, last_of_month, parse_date, parse_month, parse_period, weekday_abbrev,
};

mod common;
use common::d;

#[test]
fn only_canonical_dates_are_accepted() {
    assert_eq!(parse_date("2024-10-01").unwrap(), d(2024, 10, 1));
    assert_eq!(parse_date(" 2024-10-01 ").unwrap(), d(2024, 10, 1));

    for bad in [
        "2024-10-1",
        "10/01/2024",
        "2024-10-01T00:00:00Z",
        "2024-13-01",
        "2024-02-30",
        "",
    ] {
        assert!(
            matches!(parse_date(bad), Err(AppError::InvalidDate(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn weekday_helpers() {
    assert!(is_weekend(&d(2024, 10, 5)));
    assert!(is_weekend(&d(2024, 10, 6)));
    assert!(!is_weekend(&d(2024, 10, 7)));
    assert_eq!(weekday_abbrev(Weekday::Thu), "Th");
    assert_eq!(weekday_abbrev(Weekday::Sun), "Sun");
}

#[test]
fn ranges_and_months() {
    assert_eq!(days_between(&d(2024, 10, 1), &d(2024, 12, 31)), 91);
    let leap = QuarterWindow::new(d(2024, 2, 27), d(2024, 3, 1)).unwrap();
    assert_eq!(leap.days().count(), 4);
    assert_eq!(leap.total_days(), 4);
    assert_eq!(last_of_month(&d(2024, 2, 10)), d(2024, 2, 29));
    assert_eq!(parse_month("2023-03").unwrap(), d(2023, 3, 1));
    assert!(parse_month("2023-3").is_err());
}

#[test]
fn periods() {
    assert_eq!(
        parse_period("2024").unwrap(),
        (d(2024, 1, 1), d(2024, 12, 31))
    );
    assert_eq!(
        parse_period("2024-11").unwrap(),
        (d(2024, 11, 1), d(2024, 11, 30))
    );
    assert_eq!(
        parse_period("2024-10:2024-12").unwrap(),
        (d(2024, 10, 1), d(2024, 12, 31))
    );
    assert_eq!(
        parse_period("2024-10-05:2024-10-09").unwrap(),
        (d(2024, 10, 5), d(2024, 10, 9))
    );
    assert!(parse_period("2024:2024-10").is_err());
    assert!(parse_period("2024-12:2024-10").is_err());
}

#[test]
fn quarter_window_rules() {
    let q = QuarterWindow::default_for_year(2024).unwrap();
    assert_eq!((q.start, q.end), (d(2024, 10, 1), d(2024, 12, 31)));
    assert_eq!(q.total_days(), 92);
    assert_eq!(q.days().count(), 92);
    assert!(q.contains(&d(2024, 12, 31)));
    assert!(!q.contains(&d(2025, 1, 1)));

    assert!(matches!(
        QuarterWindow::new(d(2024, 12, 31), d(2024, 10, 1)),
        Err(AppError::InvalidWindow(_))
    ));
}

#[test]
fn event_normalization_and_types() {
    let mut v = Event::vacation(d(2024, 10, 1), "PTO");
    v.is_in_office = true;
    assert!(!v.normalized().is_in_office);

    assert_eq!(EventType::et_from_str(" Vacation "), Some(EventType::Vacation));
    assert_eq!(EventType::et_from_str("remote"), None);

    let a = Event::attendance(d(2024, 10, 1), true);
    assert!(a.counts_as_office_day());
    assert_eq!(a.in_office_label(), "Yes");
    assert_eq!(Event::holiday(d(2024, 1, 1), "NY").in_office_label(), "N/A");
    assert!(!a.is_persisted());
}

#[test]
fn event_json_uses_wire_names() {
    let ev: Event = serde_json::from_str(
        r#"{"date":"2024-10-01","description":"x","type":"attendance","isInOffice":true}"#,
    )
    .unwrap();
    assert_eq!(ev.kind, EventType::Attendance);
    assert!(ev.is_in_office);
    assert_eq!(ev.id, 0);

    let out = serde_json::to_value(&ev).unwrap();
    assert_eq!(out["type"], "attendance");
    assert_eq!(out["isInOffice"], true);
    assert_eq!(out["date"], "2024-10-01");
}

#[test]
fn preference_parsing() {
    let p = Preferences::default();
    assert_eq!(p.default_days, "T,W,Th,F");
    assert!(p.is_default_office_day(Weekday::Thu));
    assert!(!p.is_default_office_day(Weekday::Mon));
    assert_eq!(p.target_days_value(), 2.5);

    assert_eq!(parse_target_days("3.5"), 3.5);
    assert_eq!(parse_target_days("n/a"), 2.5);
}
