//! Slot label utilities: parsing and formatting the `HhMM` notation
//! used by the roster data ("8h00", "17h30").

use chrono::{NaiveTime, Timelike};

pub fn parse_label(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label, "%Hh%M").ok()
}

/// Format a time back into the roster notation. Hours are not
/// zero-padded ("8h00", not "08h00").
pub fn format_label(t: NaiveTime) -> String {
    format!("{}h{:02}", t.hour(), t.minute())
}

pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
