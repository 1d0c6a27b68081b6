use crate::config::Config;
use crate::core::roster;
use crate::errors::AppResult;
use crate::utils::color::ansi_swatch;
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

/// Handle the `roster` command: print the configured employees and the
/// week layout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (employees, days) = roster::build_week(cfg)?;

    let mut table = Table::new(&["", "Name", "Hours/week", "Target/day", "Notes"]);

    for e in &employees {
        let mut notes = Vec::new();
        if e.weekend_only {
            notes.push("weekend only".to_string());
        }
        if let Some(cutoff) = &e.day_cutoff {
            notes.push(format!("off {} from {}", cutoff.day, cutoff.until));
        }

        table.add_row(vec![
            ansi_swatch(&e.color),
            e.name.clone(),
            e.weekly_hours.to_string(),
            format_minutes(e.daily_target_minutes()),
            notes.join(", "),
        ]);
    }

    println!("👥 Roster:\n");
    println!("{}", table.render());

    println!("📅 Week:\n");
    let mut week = Table::new(&["Day", "Open", "Close", "Slots"]);
    for (d, hours) in days.iter().zip(&cfg.week) {
        week.add_row(vec![
            d.name.clone(),
            hours.open.clone(),
            hours.close.clone(),
            d.slots.len().to_string(),
        ]);
    }
    println!("{}", week.render());

    Ok(())
}
