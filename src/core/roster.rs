//! Roster construction: turn the configuration into the employee list
//! and the day grid the assigner consumes.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::employee::Employee;
use crate::utils::color::parse_hex;
use crate::utils::time::parse_label;

pub fn build_week(cfg: &Config) -> AppResult<(Vec<Employee>, Vec<Day>)> {
    let mut days = Vec::with_capacity(cfg.week.len());
    for d in &cfg.week {
        days.push(Day::from_hours(&d.name, &d.open, &d.close)?);
    }

    for e in &cfg.employees {
        parse_hex(&e.color)?;
    }

    Ok((cfg.employees.clone(), days))
}

/// Non-fatal configuration problems, reported by `config --check`.
/// A cutoff that references a missing day or an unparsable time is not
/// an error at generation time (the full range is used instead), but it
/// is almost certainly a typo.
pub fn check(cfg: &Config) -> Vec<String> {
    let mut problems = Vec::new();

    if cfg.employees.is_empty() {
        problems.push("no employees configured".to_string());
    }
    if cfg.week.is_empty() {
        problems.push("no days configured".to_string());
    }

    for d in &cfg.week {
        if parse_label(&d.open).is_none() {
            problems.push(format!("day '{}': invalid opening time '{}'", d.name, d.open));
        }
        if parse_label(&d.close).is_none() {
            problems.push(format!("day '{}': invalid closing time '{}'", d.name, d.close));
        }
        if let (Some(open), Some(close)) = (parse_label(&d.open), parse_label(&d.close))
            && open > close
        {
            problems.push(format!("day '{}': opens after it closes", d.name));
        }
    }

    let mut seen = std::collections::HashSet::new();
    for e in &cfg.employees {
        if !seen.insert(e.name.as_str()) {
            problems.push(format!("duplicate employee name '{}'", e.name));
        }
        if parse_hex(&e.color).is_err() {
            problems.push(format!("employee '{}': invalid color '{}'", e.name, e.color));
        }
        if let Some(cutoff) = &e.day_cutoff {
            if !cfg.week.iter().any(|d| d.name == cutoff.day) {
                problems.push(format!(
                    "employee '{}': cutoff references unknown day '{}'",
                    e.name, cutoff.day
                ));
            }
            if parse_label(&cutoff.until).is_none() {
                problems.push(format!(
                    "employee '{}': invalid cutoff time '{}'",
                    e.name, cutoff.until
                ));
            }
        }
    }

    problems
}
