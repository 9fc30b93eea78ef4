// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_time;
use crate::export::model::{export_to_row, get_headers};
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Report";

// column positions, see `get_headers`
const TIME_IN_COL: u16 = 2;
const TIME_OUT_COL: u16 = 4;
const HOURS_COL: u16 = 6;

/// How a column's text lands in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Text,
    Time,
    Hours,
}

fn cell_kind(col: u16) -> CellKind {
    match col {
        TIME_IN_COL | TIME_OUT_COL => CellKind::Time,
        HOURS_COL => CellKind::Hours,
        _ => CellKind::Text,
    }
}

/// Single-sheet workbook with a styled header, banded rows and fitted columns.
pub(crate) fn export_xlsx(rows: &[ReportExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    // ---------------------------
    // Header
    // ---------------------------
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
            .map_err(xlsx_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in export_to_row(item).iter().enumerate() {
            let c = col as u16;
            write_cell(worksheet, row, c, cell_kind(c), value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    // ---------------------------
    // Save
    // ---------------------------
    workbook.save(path).map_err(xlsx_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell. Only the time columns become Excel times and only the
/// hours column becomes a number; free text (name, date, statuses) stays a string.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    kind: CellKind,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if kind == CellKind::Time
        && let Some((num_format, serial)) = parse_to_excel_time(s)
    {
        worksheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(xlsx_error)?;
        return Ok(());
    }

    if kind == CellKind::Hours
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right).set_num_format("0.00");
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(xlsx_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(xlsx_error)?;

    Ok(())
}

fn xlsx_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
