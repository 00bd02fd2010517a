//! Raw input rows.
//!
//! Both records keep every column as the text the user entered; parsing
//! happens in [`crate::calculation`] so failures carry the original value.

use serde::{Deserialize, Serialize};

/// One worker's shift for the day, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Shift start, `HH:MM`.
    pub start_time: String,
    /// Shift end, `HH:MM`.
    pub end_time: String,
    /// Free-text break interval, e.g. `"12.30-1pm"` or `"3 - 3:15 PM"`.
    pub break_notes: String,
    /// Hourly pay rate as decimal text.
    pub pay_rate: String,
}

impl ShiftRecord {
    /// Convenience constructor used by tests and benchmarks.
    pub fn new(start_time: &str, end_time: &str, break_notes: &str, pay_rate: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            break_notes: break_notes.to_string(),
            pay_rate: pay_rate.to_string(),
        }
    }
}

/// One sales transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Transaction time; only the leading hour is used (`"17:32"`, `"17"`).
    pub time: String,
    /// Transaction amount as decimal text.
    pub amount: String,
}

impl SaleRecord {
    /// Convenience constructor used by tests and benchmarks.
    pub fn new(time: &str, amount: &str) -> Self {
        Self {
            time: time.to_string(),
            amount: amount.to_string(),
        }
    }
}
