// src/export/html.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::schedule::WeekSchedule;
use crate::render::html::render_week;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the rendered HTML document.
pub(crate) fn export_html(schedule: &WeekSchedule, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    let document = render_week(schedule);

    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;

    notify_export_success("HTML", path);
    Ok(())
}
