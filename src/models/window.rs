use crate::errors::{AppError, AppResult};
use crate::utils::date::{days_between, format_date};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Inclusive `[start, end]` reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QuarterWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidWindow(format!(
                "start {} is after end {}",
                format_date(&start),
                format_date(&end)
            )));
        }
        Ok(Self { start, end })
    }

    /// October 1st to December 31st of `year`.
    pub fn default_for_year(year: i32) -> AppResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 10, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        match (start, end) {
            (Some(s), Some(e)) => Self::new(s, e),
            _ => Err(AppError::InvalidWindow(format!("year {year} out of range"))),
        }
    }

    pub fn total_days(&self) -> i64 {
        days_between(&self.start, &self.end) + 1
    }

    pub fn contains(&self, d: &NaiveDate) -> bool {
        *d >= self.start && *d <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

impl fmt::Display for QuarterWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", format_date(&self.start), format_date(&self.end))
    }
}
