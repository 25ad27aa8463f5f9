use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub in_office_count: i64,
    pub total_days: i64,
    /// In-office days as a percentage of all days in the window.
    pub average_percent: f64,
    pub average_days_per_week: f64,
    pub target_days: f64,
    /// `average_days_per_week` as a percentage of `target_days`.
    pub attainment_percent: f64,
}
