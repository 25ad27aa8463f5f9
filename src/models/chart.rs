use chrono::NaiveDate;
use serde::Serialize;

/// One day of the cumulative days/week trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub comes_in: bool,
    #[serde(rename = "total")]
    pub running_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub data: Vec<ChartPoint>,
    pub target_days: f64,
}
