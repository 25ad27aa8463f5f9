use rtotracker::core::chart::{build_chart_response, build_chart_series};
use rtotracker::core::stats::{calculate_attendance_stats, count_in_office};
use rtotracker::models::event::Event;
use rtotracker::models::window::QuarterWindow;

mod common;
use common::d;

fn q4_2024() -> QuarterWindow {
    QuarterWindow::default_for_year(2024).unwrap()
}

fn sample_events() -> Vec<Event> {
    vec![
        // inside, in office
        Event::attendance(d(2024, 10, 1), true),
        Event::attendance(d(2024, 11, 14), true),
        Event::attendance(d(2024, 12, 31), true),
        // inside, not counted
        Event::attendance(d(2024, 10, 2), false),
        Event::vacation(d(2024, 10, 3), "PTO"),
        Event::holiday(d(2024, 12, 25), "Christmas"),
        // outside
        Event::attendance(d(2024, 9, 30), true),
        Event::attendance(d(2025, 1, 1), true),
    ]
}

#[test]
fn quarter_example_matches_expected_figures() {
    let stats = calculate_attendance_stats(&sample_events(), &q4_2024(), "2.5");

    assert_eq!(stats.in_office_count, 3);
    assert_eq!(stats.total_days, 92);
    assert!((stats.average_percent - 3.26).abs() < 0.01);
    assert!((stats.average_days_per_week - 0.2283).abs() < 0.001);
    assert_eq!(stats.target_days, 2.5);
    assert!((stats.attainment_percent - 9.13).abs() < 0.01);
}

#[test]
fn days_per_week_is_percent_times_seven() {
    let window = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 20)).unwrap();
    let events: Vec<Event> = (7..=11)
        .map(|day| Event::attendance(d(2024, 10, day), day % 2 == 1))
        .collect();

    let s = calculate_attendance_stats(&events, &window, "3");
    assert!((s.average_days_per_week - s.average_percent / 100.0 * 7.0).abs() < 1e-9);
    assert!(s.in_office_count <= s.total_days);
    assert_eq!(s.in_office_count, 3);
}

#[test]
fn window_bounds_are_inclusive() {
    let window = QuarterWindow::new(d(2024, 10, 1), d(2024, 10, 1)).unwrap();
    let events = vec![Event::attendance(d(2024, 10, 1), true)];
    assert_eq!(count_in_office(&events, &window), 1);

    let s = calculate_attendance_stats(&events, &window, "2.5");
    assert_eq!(s.total_days, 1);
    assert_eq!(s.average_percent, 100.0);
}

#[test]
fn bad_or_zero_target() {
    let s = calculate_attendance_stats(&sample_events(), &q4_2024(), "two and a half");
    assert_eq!(s.target_days, 2.5);

    let zero = calculate_attendance_stats(&sample_events(), &q4_2024(), "0");
    assert_eq!(zero.target_days, 0.0);
    assert_eq!(zero.attainment_percent, 0.0);
}

#[test]
fn no_events_gives_zeroes() {
    let s = calculate_attendance_stats(&[], &q4_2024(), "2.5");
    assert_eq!(s.in_office_count, 0);
    assert_eq!(s.average_percent, 0.0);
    assert_eq!(s.attainment_percent, 0.0);
}

// ---------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------

#[test]
fn chart_has_one_point_per_day_and_accumulates() {
    // Mon 7 .. Sun 13
    let week = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 13)).unwrap();
    let events = vec![
        Event::attendance(d(2024, 10, 8), true),
        Event::attendance(d(2024, 10, 9), false),
        Event::attendance(d(2024, 10, 10), true),
        // weekend rows never count
        Event::attendance(d(2024, 10, 12), true),
    ];

    let series = build_chart_series(&events, &week);
    assert_eq!(series.len(), 7);

    let comes_in: Vec<bool> = series.iter().map(|p| p.comes_in).collect();
    assert_eq!(comes_in, vec![false, true, false, true, false, false, false]);

    // each office day adds 7/7 = 1 day/week
    let totals: Vec<f64> = series.iter().map(|p| p.running_total).collect();
    assert_eq!(totals, vec![0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn chart_final_point_matches_stats() {
    let window = q4_2024();
    let events = sample_events();

    let chart = build_chart_response(&events, &window, "3");
    let stats = calculate_attendance_stats(&events, &window, "3");

    assert_eq!(chart.data.len(), 92);
    assert_eq!(chart.target_days, 3.0);
    // 2024-12-31 is a Tuesday, Oct 1 a Tuesday, Nov 14 a Thursday
    let last = chart.data.last().unwrap().running_total;
    assert!((last - stats.average_days_per_week).abs() < 1e-9);
}

#[test]
fn chart_target_falls_back() {
    let week = QuarterWindow::new(d(2024, 10, 7), d(2024, 10, 13)).unwrap();
    assert_eq!(build_chart_response(&[], &week, "").target_days, 2.5);
}
