use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Holiday,
    Vacation,
    Attendance,
}

impl EventType {
    /// Parse user input (case-insensitive, surrounding spaces ignored).
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "holiday" => Some(Self::Holiday),
            "vacation" => Some(Self::Vacation),
            "attendance" => Some(Self::Attendance),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Holiday => "holiday",
            EventType::Vacation => "vacation",
            EventType::Attendance => "attendance",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.et_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "holiday" => Some(EventType::Holiday),
            "vacation" => Some(EventType::Vacation),
            "attendance" => Some(EventType::Attendance),
            _ => None,
        }
    }

    /// Capitalized label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Holiday => "Holiday",
            EventType::Vacation => "Vacation",
            EventType::Attendance => "Attendance",
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, EventType::Holiday)
    }

    pub fn is_vacation(&self) -> bool {
        matches!(self, EventType::Vacation)
    }

    pub fn is_attendance(&self) -> bool {
        matches!(self, EventType::Attendance)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.et_as_str())
    }
}
