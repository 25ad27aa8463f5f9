use super::event_type::EventType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar entry.
///
/// `id == 0` means the event has not been persisted yet; the store assigns
/// the real id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: i64,
    pub date: NaiveDate, // ⇔ events.date (TEXT "YYYY-MM-DD")
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType, // ⇔ events.type
    #[serde(default)]
    pub is_in_office: bool, // only meaningful for attendance
}

impl Event {
    pub fn new(date: NaiveDate, kind: EventType, description: &str, is_in_office: bool) -> Self {
        Self {
            id: 0,
            date,
            description: description.to_string(),
            kind,
            is_in_office,
        }
        .normalized()
    }

    pub fn holiday(date: NaiveDate, description: &str) -> Self {
        Self::new(date, EventType::Holiday, description, false)
    }

    pub fn vacation(date: NaiveDate, description: &str) -> Self {
        Self::new(date, EventType::Vacation, description, false)
    }

    pub fn attendance(date: NaiveDate, is_in_office: bool) -> Self {
        Self::new(date, EventType::Attendance, "", is_in_office)
    }

    /// Holidays and vacations are never "in office".
    pub fn normalized(mut self) -> Self {
        if !self.kind.is_attendance() {
            self.is_in_office = false;
        }
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// True for an attendance event marked in-office.
    pub fn counts_as_office_day(&self) -> bool {
        self.kind.is_attendance() && self.is_in_office
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// "Yes"/"No" for attendance, "N/A" otherwise.
    pub fn in_office_label(&self) -> &'static str {
        match (self.kind, self.is_in_office) {
            (EventType::Attendance, true) => "Yes",
            (EventType::Attendance, false) => "No",
            _ => "N/A",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event{{ID: {}, Date: {}, Description: {:?}, IsInOffice: {}, Type: {:?}}}",
            self.id,
            self.date_str(),
            self.description,
            self.is_in_office,
            self.kind.et_as_str()
        )
    }
}
