use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_label, parse_label};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A working day: a name and an ordered sequence of half-hour slot labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub name: String,
    pub slots: Vec<String>,
}

impl Day {
    /// Build a day from opening and closing times, generating the slot
    /// labels at 30-minute steps, inclusive of both endpoints.
    ///
    /// An opening time past the closing time yields a day with no slots.
    pub fn from_hours(name: &str, open: &str, close: &str) -> AppResult<Self> {
        let start = parse_label(open).ok_or_else(|| AppError::InvalidTime(open.to_string()))?;
        let end = parse_label(close).ok_or_else(|| AppError::InvalidTime(close.to_string()))?;

        let mut slots = Vec::new();
        let mut t = start;

        while t <= end {
            slots.push(format_label(t));

            let (next, wrapped) = t.overflowing_add_signed(Duration::minutes(30));
            if wrapped != 0 {
                // midnight reached
                break;
            }
            t = next;
        }

        Ok(Self {
            name: name.to_string(),
            slots,
        })
    }

    /// Index one past the last slot strictly before `until`.
    /// An unparsable cutoff degrades to the full slot range.
    pub fn cutoff_index(&self, until: &str) -> usize {
        match parse_label(until) {
            Some(cut) => self
                .slots
                .partition_point(|s| matches!(parse_label(s), Some(t) if t < cut)),
            None => self.slots.len(),
        }
    }

    /// Position of a slot label within the day, if present.
    pub fn slot_index(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == label)
    }
}
