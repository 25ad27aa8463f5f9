use crate::errors::{AppError, AppResult};
use crate::export::{EventExport, notify_export_success};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Pretty-printed array of events, newline terminated.
pub(crate) fn export_json(events: &[EventExport], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, events)?;
    out.write_all(b"\n")?;
    out.flush()?;

    debug!(rows = events.len(), path = %path.display(), "json written");
    notify_export_success("JSON", path);
    Ok(())
}

/// Header row comes from the serde field names of [`EventExport`].
pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    let csv_err = |e: csv::Error| AppError::Export(format!("CSV {}: {e}", path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    events
        .iter()
        .try_for_each(|row| wtr.serialize(row))
        .map_err(csv_err)?;
    wtr.flush()?;

    debug!(rows = events.len(), path = %path.display(), "csv written");
    notify_export_success("CSV", path);
    Ok(())
}
