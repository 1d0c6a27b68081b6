use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default roster
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rShiftPlanner…");

    let target = Config::init_all(cli.config.as_deref(), cli.test)?;

    println!("📄 Config file : {}", target.display());

    let cfg = Config::load_from(&target);
    println!(
        "👥 Roster      : {} employees over {} days",
        cfg.employees.len(),
        cfg.week.len()
    );

    println!("🎉 rShiftPlanner initialization completed!");
    Ok(())
}
