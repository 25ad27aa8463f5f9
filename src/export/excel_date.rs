use chrono::NaiveDate;

pub(crate) const EXCEL_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Excel serial number (days since 1899-12-30) of a `YYYY-MM-DD` string.
pub(crate) fn date_to_excel_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
