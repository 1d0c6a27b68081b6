use crate::models::day::Day;
use serde::Serialize;

/// One employee's result for one day: worked slots and break slots,
/// both ordered by time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayPlan {
    pub worked: Vec<String>,
    pub breaks: Vec<String>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.worked.is_empty() && self.breaks.is_empty()
    }

    /// Minutes credited for the day: half an hour per worked slot plus
    /// one hour per break.
    pub fn credited_minutes(&self) -> u32 {
        self.worked.len() as u32 * 30 + self.breaks.len() as u32 * 60
    }
}

/// Assignment result for one employee across the whole week.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePlan {
    pub name: String,
    pub color: String,
    pub days: Vec<DayPlan>,
}

impl EmployeePlan {
    pub fn is_worked(&self, day_index: usize, slot: &str) -> bool {
        self.days
            .get(day_index)
            .is_some_and(|d| d.worked.iter().any(|s| s == slot))
    }
}

/// Full weekly assignment: the input days plus one plan per employee,
/// together with the seed that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSchedule {
    pub seed: u64,
    pub days: Vec<Day>,
    pub plans: Vec<EmployeePlan>,
}
