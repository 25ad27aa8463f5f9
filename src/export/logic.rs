use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::markdown::export_markdown;
use crate::export::model::EventExport;
use crate::export::xlsx::export_xlsx;
use crate::store::EventStore;
use crate::ui::messages::warning;
use crate::utils::date::{format_date, month_name, parse_period};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export stored events to `file` (absolute path).
    ///
    /// `range` is `None`, `"all"`, or a period understood by
    /// [`parse_period`]. Returns the number of exported events.
    pub fn export<S: EventStore>(
        store: &S,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let events = match bounds {
            None => store.all_events()?,
            Some((start, end)) => store.events_between(start, end)?,
        };

        if events.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<EventExport> = events.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Markdown => export_markdown(&rows, path, &build_title(bounds))?,
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}

/// Heading for document-style exports.
fn build_title(bounds: Option<(NaiveDate, NaiveDate)>) -> String {
    let Some((start, end)) = bounds else {
        return "Attendance events".to_string();
    };

    if start == end {
        return format!("Attendance events for {}", format_date(&start));
    }

    let whole_month = start.day() == 1
        && start.year() == end.year()
        && start.month() == end.month()
        && end == crate::utils::date::last_of_month(&start);
    if whole_month {
        return format!(
            "Attendance events for {} {}",
            month_name(start.month()),
            start.year()
        );
    }

    format!(
        "Attendance events from {} to {}",
        format_date(&start),
        format_date(&end)
    )
}
