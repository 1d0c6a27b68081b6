// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::schedule::WeekSchedule;
use crate::ui::messages::info;
use crate::utils::color::hex_to_u32;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: un worksheet per giorno, celle colorate per le
/// assegnazioni, larghezza colonne automatica.
pub(crate) fn export_xlsx(schedule: &WeekSchedule, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // Caso settimana vuota
    // ---------------------------
    if schedule.days.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .write(0, 0, "No days configured")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        notify_export_success("XLSX (empty week)", path);
        return Ok(());
    }

    // Colori risolti una volta sola per dipendente
    let mut cell_formats = Vec::with_capacity(schedule.plans.len());
    for plan in &schedule.plans {
        let fill = Color::RGB(hex_to_u32(&plan.color)?);
        cell_formats.push(
            Format::new()
                .set_background_color(fill)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
        );
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let blank_format = Format::new().set_border(FormatBorder::Thin);

    for (day_index, day) in schedule.days.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&day.name).map_err(to_export_error)?;

        // ---------------------------
        // Header
        // ---------------------------
        worksheet
            .write_with_format(0, 0, "Time", &header_format)
            .map_err(to_export_error)?;

        let mut col_widths: Vec<usize> = vec![UnicodeWidthStr::width("Time")];

        for (col, plan) in schedule.plans.iter().enumerate() {
            worksheet
                .write_with_format(0, (col + 1) as u16, plan.name.as_str(), &header_format)
                .map_err(to_export_error)?;
            col_widths.push(UnicodeWidthStr::width(plan.name.as_str()));
        }

        worksheet.set_freeze_panes(1, 0).ok();

        // ---------------------------
        // Griglia
        // ---------------------------
        for (row_index, slot) in day.slots.iter().enumerate() {
            let row = (row_index + 1) as u32;

            worksheet
                .write_with_format(row, 0, slot.as_str(), &blank_format)
                .map_err(to_export_error)?;
            col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(slot.as_str()));

            for (col, plan) in schedule.plans.iter().enumerate() {
                let fmt = if plan.is_worked(day_index, slot) {
                    &cell_formats[col]
                } else {
                    &blank_format
                };

                worksheet
                    .write_with_format(row, (col + 1) as u16, "", fmt)
                    .map_err(to_export_error)?;
            }
        }

        // ---------------------------
        // Set column widths
        // ---------------------------
        for (c, w) in col_widths.iter().enumerate() {
            worksheet
                .set_column_width(c as u16, *w as f64 + 2.0)
                .map_err(to_export_error)?;
        }
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
