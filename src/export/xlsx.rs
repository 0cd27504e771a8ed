// src/export/xlsx.rs

use crate::core::stats;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::RecordTable;
use crate::ui::messages::info;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Workbook with a "Records" sheet (one row per day, banded) and a
/// "Weekly" sheet (totals per ISO week).
pub(crate) fn export_xlsx(table: &RecordTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let records = workbook.add_worksheet();
    records.set_name("Records").map_err(to_app_error)?;
    write_records(records, table)?;

    let weekly = workbook.add_worksheet();
    weekly.set_name("Weekly").map_err(to_app_error)?;
    write_weekly(weekly, table)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path, table.len());
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_header(ws: &mut Worksheet, headers: &[&str]) -> AppResult<Vec<usize>> {
    let fmt = header_format();
    for (col, header) in headers.iter().enumerate() {
        ws.write_with_format(0, col as u16, *header, &fmt)
            .map_err(to_app_error)?;
    }
    ws.set_freeze_panes(1, 0).ok();

    Ok(headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect())
}

fn write_records(ws: &mut Worksheet, table: &RecordTable) -> AppResult<()> {
    let mut col_widths = write_header(ws, &RecordTable::COLUMNS)?;
    col_widths[0] = col_widths[0].max(DATE_FORMAT.len());

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (idx, r) in table.iter().enumerate() {
        let row = (idx + 1) as u32;
        let bg = if idx % 2 == 0 { band1 } else { band2 };

        let date_fmt = cell_format(bg).set_num_format(DATE_FORMAT);
        ws.write_with_format(row, 0, excel_serial(r.date), &date_fmt)
            .map_err(to_app_error)?;

        let num_fmt = cell_format(bg).set_align(FormatAlign::Right);
        let values = [r.morning, r.afternoon, r.evening, r.total];
        for (i, v) in values.iter().enumerate() {
            let col = i + 1;
            ws.write_with_format(row, col as u16, f64::from(*v), &num_fmt)
                .map_err(to_app_error)?;
            col_widths[col] = col_widths[col].max(v.to_string().len());
        }
    }

    set_widths(ws, &col_widths)
}

fn write_weekly(ws: &mut Worksheet, table: &RecordTable) -> AppResult<()> {
    let mut col_widths = write_header(ws, &["week", "total"])?;
    let fmt = cell_format(Color::RGB(0xFFFFFF)).set_align(FormatAlign::Right);

    for (idx, w) in stats::weekly_totals(table).iter().enumerate() {
        let row = (idx + 1) as u32;
        ws.write_with_format(row, 0, f64::from(w.week), &fmt)
            .map_err(to_app_error)?;
        ws.write_with_format(row, 1, w.total as f64, &fmt)
            .map_err(to_app_error)?;
        col_widths[1] = col_widths[1].max(w.total.to_string().len());
    }

    set_widths(ws, &col_widths)
}

fn set_widths(ws: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        ws.set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

/// Days since the Excel epoch (1899-12-30).
fn excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
