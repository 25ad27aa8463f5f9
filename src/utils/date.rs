//! Calendar-day helpers: strict parsing, weekday classification, ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// The only date layout accepted at the boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekday abbreviations in Monday-first order.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["M", "T", "W", "Th", "F", "Sat", "Sun"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` string. Any other layout (timestamps, unpadded
/// fields, trailing text) is rejected.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if s.len() != 10 {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Whole days from `start` to `end` (negative if `end` is earlier).
pub fn days_between(start: &NaiveDate, end: &NaiveDate) -> i64 {
    (*end - *start).num_days()
}

pub fn is_weekend(d: &NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_weekday(d: &NaiveDate) -> bool {
    !is_weekend(d)
}

pub fn weekday_abbrev(w: Weekday) -> &'static str {
    WEEKDAY_ABBREVIATIONS[w.num_days_from_monday() as usize]
}

pub fn first_of_month(d: &NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(*d)
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if s.len() != 7 {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    parse_date(&format!("{s}-01"))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Parse a period expression into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidWindow(format!(
                    "start and end of '{r}' must have the same format"
                )));
            }
            (period_bounds(s)?.0, period_bounds(e)?.1)
        }
        None => period_bounds(r)?,
    };

    if start > end {
        return Err(AppError::InvalidWindow(format!(
            "period '{r}' starts after it ends"
        )));
    }
    Ok((start, end))
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1);
            let last = NaiveDate::from_ymd_opt(y, 12, 31);
            first
                .zip(last)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))
        }
        // YYYY-MM
        7 => {
            let first = parse_month(p)?;
            Ok((first, last_of_month(&first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(p.to_string())),
    }
}

pub fn last_of_month(d: &NaiveDate) -> NaiveDate {
    let first = first_of_month(d);
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}
