use super::event::Event;
use chrono::NaiveDate;
use serde::Serialize;

/// A single cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub today: bool,
    pub events: Vec<Event>,
    pub is_weekend: bool,
    pub is_future: bool, // weekdays after today only
}

impl CalendarDay {
    pub fn new(date: NaiveDate, in_month: bool, is_weekend: bool) -> Self {
        Self {
            date,
            in_month,
            today: false,
            events: Vec::new(),
            is_weekend,
            is_future: false,
        }
    }
}

/// Rows of seven days, Sunday first.
pub type MonthGrid = Vec<Vec<CalendarDay>>;
