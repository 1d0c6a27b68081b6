use serde::{Deserialize, Serialize};

/// Reference week length of the roster data. The weekly-hours target is
/// spread over six working days regardless of how many days are configured.
pub const TARGET_WEEK_DAYS: u32 = 6;

/// A roster member with contract hours and availability flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,

    /// Display color used by every export format (`#RRGGBB`).
    pub color: String,

    /// Contract hours per week.
    pub weekly_hours: u32,

    /// Works only the final two days of the configured week.
    #[serde(default)]
    pub weekend_only: bool,

    /// Day-specific early close: no slots at or after `until` on `day`.
    #[serde(default)]
    pub day_cutoff: Option<DayCutoff>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCutoff {
    pub day: String,
    pub until: String,
}

impl Employee {
    pub fn new(name: &str, color: &str, weekly_hours: u32) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            weekly_hours,
            weekend_only: false,
            day_cutoff: None,
        }
    }

    /// Daily stopping threshold in minutes: weekly hours spread over the
    /// six-day reference week (integer division).
    pub fn daily_target_minutes(&self) -> u32 {
        self.weekly_hours * 60 / TARGET_WEEK_DAYS
    }
}
