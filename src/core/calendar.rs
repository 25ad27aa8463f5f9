//! Month grid for the calendar view: Sunday-first rows of seven days.

use crate::models::calendar_day::{CalendarDay, MonthGrid};
use crate::models::event::Event;
use crate::utils::date::{first_of_month, is_weekend, is_weekday};
use chrono::{Datelike, Duration, NaiveDate};

const MAX_ROWS: usize = 6;

/// Build the grid of the month containing `any_day`.
///
/// Rows run Sunday → Saturday. The first row starts on the Sunday on or
/// before the 1st; rows stop once a row lies entirely in the next month.
pub fn build_month_grid(any_day: NaiveDate) -> MonthGrid {
    let first = first_of_month(&any_day);
    let month = first.month();
    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

    let mut days = start.iter_days();
    let mut grid: MonthGrid = Vec::with_capacity(MAX_ROWS);

    for _ in 0..MAX_ROWS {
        let row: Vec<CalendarDay> = days
            .by_ref()
            .take(7)
            .map(|d| CalendarDay::new(d, d.month() == month, is_weekend(&d)))
            .collect();

        if !row.iter().any(|d| d.in_month) {
            break;
        }
        grid.push(row);
    }

    grid
}

/// Attach events to their day and set the `today`/`is_future` flags.
/// Only weekdays after `today` are marked future.
pub fn populate_month_grid(grid: &mut MonthGrid, events: &[Event], today: NaiveDate) {
    for day in grid.iter_mut().flatten() {
        day.events = events
            .iter()
            .filter(|e| e.date == day.date)
            .cloned()
            .collect();
        day.today = day.date == today;
        day.is_future = day.date > today && is_weekday(&day.date);
    }
}
