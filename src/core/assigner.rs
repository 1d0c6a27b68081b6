//! Slot assignment: fills one week of per-employee day plans from the
//! roster and the day grid, driven by a seeded random generator.

use crate::models::day::Day;
use crate::models::employee::Employee;
use crate::models::schedule::{DayPlan, EmployeePlan, WeekSchedule};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Minutes credited per worked slot.
const SLOT_MINUTES: u32 = 30;
/// Minutes credited per inserted break.
const BREAK_MINUTES: u32 = 60;
/// Worked-slot count that triggers a break.
const BREAK_EVERY: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Independent 50% draw per slot, the historical behavior.
    CoinFlip,
    /// Contiguous left-to-right fill sized on the daily target; the draw
    /// only picks the start offset among equally feasible ones.
    Balanced,
}

pub struct Assigner {
    strategy: Strategy,
    seed: u64,
    rng: StdRng,
}

impl Assigner {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Assign the whole week. Day-major iteration order, so a given seed
    /// always replays the same draw sequence over the same roster.
    pub fn assign(mut self, employees: &[Employee], days: &[Day]) -> WeekSchedule {
        let mut plans: Vec<EmployeePlan> = employees
            .iter()
            .map(|e| EmployeePlan {
                name: e.name.clone(),
                color: e.color.clone(),
                days: vec![DayPlan::default(); days.len()],
            })
            .collect();

        // weekend = the final two days of the configured week
        let weekend_start = days.len().saturating_sub(2);

        for (day_index, day) in days.iter().enumerate() {
            for (e_index, employee) in employees.iter().enumerate() {
                if employee.weekend_only && day_index < weekend_start {
                    continue;
                }

                let end = eligible_end(employee, day);
                let target = employee.daily_target_minutes();
                let plan = &mut plans[e_index].days[day_index];

                match self.strategy {
                    Strategy::CoinFlip => coin_flip_day(&mut self.rng, day, end, target, plan),
                    Strategy::Balanced => balanced_day(&mut self.rng, day, end, target, plan),
                }
            }
        }

        WeekSchedule {
            seed: self.seed,
            days: days.to_vec(),
            plans,
        }
    }
}

/// Index one past the last eligible slot for `employee` on `day`.
fn eligible_end(employee: &Employee, day: &Day) -> usize {
    if let Some(cutoff) = &employee.day_cutoff
        && cutoff.day == day.name
    {
        return day.cutoff_index(&cutoff.until);
    }
    day.slots.len()
}

/// Historical policy: walk the eligible range with a strictly advancing
/// cursor. Once the worked count is a positive multiple of four, a break
/// is recorded (one hour credited, one slot skipped); otherwise a fair
/// coin decides whether the cursor slot is worked.
///
/// Breaks do not reset the worked count, so once it reaches four the
/// walk keeps inserting breaks until the target is met. Kept as-is.
fn coin_flip_day(rng: &mut StdRng, day: &Day, end: usize, target: u32, plan: &mut DayPlan) {
    let mut minutes = 0u32;
    let mut cursor = 0usize;

    while minutes < target && cursor < end {
        if !plan.worked.is_empty() && plan.worked.len() % BREAK_EVERY == 0 {
            plan.breaks.push(day.slots[cursor].clone());
            minutes += BREAK_MINUTES;
            cursor += 2;
        } else if rng.random_bool(0.5) {
            plan.worked.push(day.slots[cursor].clone());
            minutes += SLOT_MINUTES;
            cursor += 1;
        } else {
            cursor += 1;
        }
    }
}

/// Redesigned policy: the target drives the allocation directly. Every
/// slot from the chosen start is worked, with a one-hour break after
/// every four contiguous worked slots. Randomness only picks the start
/// offset among those from which the full span fits.
fn balanced_day(rng: &mut StdRng, day: &Day, end: usize, target: u32, plan: &mut DayPlan) {
    if end == 0 || target == 0 {
        return;
    }

    let span = span_for(target);
    let start = if span < end {
        rng.random_range(0..=end - span)
    } else {
        0
    };

    let mut minutes = 0u32;
    let mut cursor = start;
    let mut streak = 0usize;

    while minutes < target && cursor < end {
        if streak == BREAK_EVERY {
            plan.breaks.push(day.slots[cursor].clone());
            minutes += BREAK_MINUTES;
            cursor += 2;
            streak = 0;
        } else {
            plan.worked.push(day.slots[cursor].clone());
            minutes += SLOT_MINUTES;
            cursor += 1;
            streak += 1;
        }
    }
}

/// Cursor span consumed by an unconstrained balanced walk until the
/// target is reached.
fn span_for(target: u32) -> usize {
    let mut minutes = 0u32;
    let mut span = 0usize;
    let mut streak = 0usize;

    while minutes < target {
        if streak == BREAK_EVERY {
            minutes += BREAK_MINUTES;
            span += 2;
            streak = 0;
        } else {
            minutes += SLOT_MINUTES;
            span += 1;
            streak += 1;
        }
    }

    span
}
