use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        seed,
        strategy,
        force,
    } = cmd
    {
        let schedule = Core::plan_week(cfg, *seed, *strategy)?;
        ExportLogic::export(&schedule, *format, file, *force)?;
    }
    Ok(())
}
