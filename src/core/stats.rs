use crate::models::event::Event;
use crate::models::preferences::parse_target_days;
use crate::models::stats::AttendanceStats;
use crate::models::window::QuarterWindow;

/// In-office attendance events whose date lies inside `window`.
pub fn count_in_office(events: &[Event], window: &QuarterWindow) -> i64 {
    events
        .iter()
        .filter(|e| e.counts_as_office_day() && window.contains(&e.date))
        .count() as i64
}

/// Derive attendance statistics for `window`.
///
/// `target_days` is the raw preference text; anything that does not parse
/// as a decimal falls back to
/// [`crate::models::preferences::FALLBACK_TARGET_DAYS`].
pub fn calculate_attendance_stats(
    events: &[Event],
    window: &QuarterWindow,
    target_days: &str,
) -> AttendanceStats {
    let total_days = window.total_days();
    let in_office_count = count_in_office(events, window);

    let (average_percent, average_days_per_week) = if total_days > 0 {
        let ratio = in_office_count as f64 / total_days as f64;
        (ratio * 100.0, ratio * 7.0)
    } else {
        (0.0, 0.0)
    };

    let target = parse_target_days(target_days);
    let attainment_percent = if target > 0.0 {
        average_days_per_week / target * 100.0
    } else {
        0.0
    };

    AttendanceStats {
        in_office_count,
        total_days,
        average_percent,
        average_days_per_week,
        target_days: target,
        attainment_percent,
    }
}

