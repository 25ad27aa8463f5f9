use crate::models::chart::{ChartPoint, ChartResponse};
use crate::models::event::Event;
use crate::models::preferences::parse_target_days;
use crate::models::window::QuarterWindow;
use crate::utils::date::is_weekday;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Cumulative days/week series over every date of `window`.
///
/// Each in-office weekday adds `7 / total_days` to the running total, so
/// the last point equals the window's average days per week.
pub fn build_chart_series(events: &[Event], window: &QuarterWindow) -> Vec<ChartPoint> {
    let office_days: HashSet<NaiveDate> = events
        .iter()
        .filter(|e| e.counts_as_office_day() && window.contains(&e.date))
        .map(|e| e.date)
        .collect();

    let total_days = window.total_days();
    let step = if total_days > 0 {
        7.0 / total_days as f64
    } else {
        0.0
    };

    let mut running_total = 0.0;
    window
        .days()
        .map(|date| {
            let comes_in = is_weekday(&date) && office_days.contains(&date);
            if comes_in {
                running_total += step;
            }
            ChartPoint {
                date,
                comes_in,
                running_total,
            }
        })
        .collect()
}

pub fn build_chart_response(
    events: &[Event],
    window: &QuarterWindow,
    target_days: &str,
) -> ChartResponse {
    ChartResponse {
        data: build_chart_series(events, window),
        target_days: parse_target_days(target_days),
    }
}
