// src/export/model.rs

use crate::models::schedule::WeekSchedule;
use serde::Serialize;

pub(crate) const KIND_WORK: &str = "work";
pub(crate) const KIND_BREAK: &str = "break";

/// Struttura "piatta" per l'export delle assegnazioni.
#[derive(Serialize, Clone, Debug)]
pub struct SlotExport {
    pub day: String,
    pub employee: String,
    pub slot: String,
    pub kind: String,
}

/// Flatten a schedule into records ordered day-major, then employee,
/// then slot time.
pub(crate) fn schedule_to_records(schedule: &WeekSchedule) -> Vec<SlotExport> {
    let mut records = Vec::new();

    for (day_index, day) in schedule.days.iter().enumerate() {
        for plan in &schedule.plans {
            let Some(day_plan) = plan.days.get(day_index) else {
                continue;
            };

            for slot in &day.slots {
                let kind = if day_plan.worked.iter().any(|s| s == slot) {
                    KIND_WORK
                } else if day_plan.breaks.iter().any(|s| s == slot) {
                    KIND_BREAK
                } else {
                    continue;
                };

                records.push(SlotExport {
                    day: day.name.clone(),
                    employee: plan.name.clone(),
                    slot: slot.clone(),
                    kind: kind.to_string(),
                });
            }
        }
    }

    records
}
