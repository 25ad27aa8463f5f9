use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{EXCEL_DATE_FORMAT, date_to_excel_serial};
use crate::export::model::get_headers;
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Styled sheet with banded rows, frozen header and fitted columns.
pub(crate) fn export_xlsx(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Events").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    // dates render as yyyy-mm-dd
    col_widths[1] = col_widths[1].max(EXCEL_DATE_FORMAT.len());

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, ev) in events.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };
        let cell = base_format(bg);

        worksheet
            .write_with_format(row, 0, ev.id as f64, &cell.clone().set_align(FormatAlign::Right))
            .map_err(to_export_error)?;

        write_date_cell(worksheet, row, 1, &ev.date, &cell)?;

        for (col, text) in [(2u16, &ev.kind), (3, &ev.description), (4, &ev.in_office)] {
            worksheet
                .write_with_format(row, col, text.as_str(), &cell)
                .map_err(to_export_error)?;
            let w = &mut col_widths[col as usize];
            *w = (*w).max(UnicodeWidthStr::width(text.as_str()));
        }

        col_widths[0] = col_widths[0].max(ev.id.to_string().len());
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_date_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, base: &Format) -> AppResult<()> {
    match date_to_excel_serial(s) {
        Some(serial) => {
            let fmt = base.clone().set_num_format(EXCEL_DATE_FORMAT);
            ws.write_with_format(row, col, serial, &fmt)
                .map_err(to_export_error)?;
        }
        None => {
            ws.write_with_format(row, col, s, base)
                .map_err(to_export_error)?;
        }
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
