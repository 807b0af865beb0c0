//! Logged bench readings.

use chrono::{DateTime, Local};

/// One row of the lab notebook
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Wall-clock time the reading was taken
    pub time: DateTime<Local>,
    /// Burette reading (mL delivered)
    pub added_mL: f64,
    /// pH at the time of reading
    pub ph: f64,
    /// What triggered the reading
    pub action: String,
}

impl Reading {
    /// Reading stamped with the current local time
    pub fn now(added_mL: f64, ph: f64, action: &str) -> Self {
        Self {
            time: Local::now(),
            added_mL,
            ph,
            action: action.to_string(),
        }
    }
}
