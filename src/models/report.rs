//! Report models.
//!
//! This module contains the [`HourlyReport`] type that captures every output
//! of a report run: the three hour mappings, the best and worst hours, and a
//! per-worker cost summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

use super::buckets::{HourBucketMap, PercentageMap};
use super::hour::{DecimalHour, HourKey};

/// The parsed, normalized form of one shift record.
///
/// # Example
///
/// ```
/// use labour_report::models::{DecimalHour, ParsedShift};
/// use rust_decimal::Decimal;
///
/// let shift = ParsedShift {
///     shift_start: DecimalHour::from_hm(9, 0),
///     shift_end: DecimalHour::from_hm(17, 0),
///     break_start: DecimalHour::from_hm(12, 0),
///     break_end: DecimalHour::from_hm(13, 0),
///     pay_rate: Decimal::new(10, 0),
/// };
/// assert_eq!(shift.worked_hours(), Decimal::new(7, 0));
/// assert_eq!(shift.day_cost().unwrap(), Decimal::new(70, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedShift {
    /// When the shift starts.
    pub shift_start: DecimalHour,
    /// When the shift ends.
    pub shift_end: DecimalHour,
    /// When the unpaid break starts.
    pub break_start: DecimalHour,
    /// When the unpaid break ends.
    pub break_end: DecimalHour,
    /// Hourly pay rate.
    pub pay_rate: Decimal,
}

impl ParsedShift {
    /// The worked interval before the break.
    pub fn before_break(&self) -> (DecimalHour, DecimalHour) {
        (self.shift_start, self.break_start)
    }

    /// The worked interval after the break.
    pub fn after_break(&self) -> (DecimalHour, DecimalHour) {
        (self.break_end, self.shift_end)
    }

    /// Shift length minus break length, in hours.
    pub fn worked_hours(&self) -> Decimal {
        (self.shift_end.value() - self.shift_start.value())
            - (self.break_end.value() - self.break_start.value())
    }

    /// Total labour cost of the shift: `pay_rate × worked_hours`.
    pub fn day_cost(&self) -> ReportResult<Decimal> {
        self.pay_rate
            .checked_mul(self.worked_hours())
            .ok_or_else(|| ReportError::AmountOverflow {
                what: "day cost".to_string(),
            })
    }

    /// Whether the break lies within the shift.
    pub fn break_within_shift(&self) -> bool {
        self.shift_start <= self.break_start
            && self.break_start <= self.break_end
            && self.break_end <= self.shift_end
    }
}

/// Cost summary for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCost {
    /// Zero-based row in the shift table.
    pub row: usize,
    /// The normalized shift.
    #[serde(flatten)]
    pub shift: ParsedShift,
    /// Hours worked excluding the break.
    pub worked_hours: Decimal,
    /// Labour cost for the day.
    pub cost: Decimal,
}

/// The complete output of a report run.
///
/// All decimal values are rounded to the configured number of places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyReport {
    /// Labour cost per hour.
    pub cost_per_hour: HourBucketMap,
    /// Sales per hour.
    pub sales_per_hour: HourBucketMap,
    /// Labour cost as a percentage of sales per hour; `-cost` when no sales.
    pub percentage_per_hour: PercentageMap,
    /// The hour with the lowest percentage.
    pub best_hour: HourKey,
    /// The hour with the highest percentage.
    pub worst_hour: HourKey,
    /// Per-worker cost summary in input order.
    pub workers: Vec<WorkerCost>,
    /// Sum of all worker costs.
    pub total_cost: Decimal,
    /// Sum of all sales.
    pub total_sales: Decimal,
}
