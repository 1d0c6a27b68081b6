// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::schedule::WeekSchedule;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF usando PdfManager e le griglie giornaliere.
pub(crate) fn export_pdf(schedule: &WeekSchedule, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_schedule(title, schedule)?;

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
