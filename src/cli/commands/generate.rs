use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::success;

/// Handle the `generate` command: one assignment run, then both the
/// HTML and the PDF documents.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        seed,
        strategy,
        html,
        pdf,
        force,
    } = cmd
    {
        let schedule = Core::plan_week(cfg, *seed, *strategy)?;

        let html_file = html.clone().unwrap_or_else(|| cfg.html_file.clone());
        let pdf_file = pdf.clone().unwrap_or_else(|| cfg.pdf_file.clone());

        ExportLogic::export(&schedule, ExportFormat::Html, &html_file, *force)?;
        ExportLogic::export(&schedule, ExportFormat::Pdf, &pdf_file, *force)?;

        success(format!(
            "Weekly schedule generated (seed {}).",
            schedule.seed
        ));
    }
    Ok(())
}
