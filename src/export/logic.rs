// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::schedule_to_records;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::schedule::WeekSchedule;
use crate::ui::messages::warning;

use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one schedule document.
    ///
    /// - `format`: "csv" | "json" | "xlsx" | "html" | "pdf"
    /// - `file`: output path, resolved against the working directory
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        schedule: &WeekSchedule,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv | ExportFormat::Json => {
                let records = schedule_to_records(schedule);

                if records.is_empty() {
                    warning("⚠️  No assignments produced for this roster.");
                    return Ok(());
                }

                match format {
                    ExportFormat::Csv => export_csv(&records, path)?,
                    _ => export_json(&records, path)?,
                }
            }
            ExportFormat::Xlsx => export_xlsx(schedule, path)?,
            ExportFormat::Html => export_html(schedule, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(schedule.seed);
                export_pdf(schedule, path, &title)?;
            }
        }

        Ok(())
    }
}

/// Costruisce il titolo del PDF. The seed is part of the title so a
/// printed schedule can always be regenerated.
fn build_pdf_title(seed: u64) -> String {
    format!("Weekly Shift Schedule (seed {seed})")
}
