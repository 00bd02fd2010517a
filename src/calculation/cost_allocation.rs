//! Hourly labour cost allocation.
//!
//! A worked interval is split across the clock hours it touches and each
//! hour receives `pay_rate × hours worked in it`. Partial first and last
//! hours are prorated.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{DecimalHour, HourBucketMap, HourKey, ParsedShift};

/// Accumulates labour cost per hour across all workers of a day.
///
/// # Example
///
/// ```
/// use labour_report::calculation::CostAccumulator;
/// use labour_report::models::{DecimalHour, HourKey};
/// use rust_decimal::Decimal;
///
/// let mut costs = CostAccumulator::new();
/// costs
///     .allocate(DecimalHour::from_hm(9, 30), DecimalHour::from_hm(11, 15), Decimal::new(10, 0))
///     .unwrap();
/// let buckets = costs.into_buckets();
/// assert_eq!(buckets[HourKey::new(9).unwrap()], Decimal::new(5, 0));
/// assert_eq!(buckets[HourKey::new(10).unwrap()], Decimal::new(10, 0));
/// assert_eq!(buckets[HourKey::new(11).unwrap()], Decimal::new(25, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostAccumulator {
    buckets: HourBucketMap,
}

impl CostAccumulator {
    /// Creates an accumulator with every hour at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the cost of working from `start` to `end` at `rate`.
    ///
    /// An interval with `end` before `start` contributes negative cost over
    /// the same hours. Zero-length pieces are skipped, so an interval ending
    /// at exactly 24:00 never touches a 25th hour; any other piece outside
    /// the day is `HourOutOfRange`.
    pub fn allocate(
        &mut self,
        start: DecimalHour,
        end: DecimalHour,
        rate: Decimal,
    ) -> ReportResult<()> {
        if end < start {
            return self.allocate(end, start, -rate);
        }

        let first = floor_hour(start)?;
        let last = floor_hour(end)?;

        if first == last {
            return self.add_piece(first, end.value() - start.value(), rate);
        }

        self.add_piece(first, Decimal::from(first + 1) - start.value(), rate)?;
        for hour in first + 1..last {
            self.add_piece(hour, Decimal::ONE, rate)?;
        }
        self.add_piece(last, end.value() - Decimal::from(last), rate)
    }

    /// Adds both worked intervals of a shift: before and after the break.
    pub fn add_shift(&mut self, shift: &ParsedShift) -> ReportResult<()> {
        let (start, end) = shift.before_break();
        self.allocate(start, end, shift.pay_rate)?;
        let (start, end) = shift.after_break();
        self.allocate(start, end, shift.pay_rate)?;

        debug!(
            shift_start = %shift.shift_start,
            shift_end = %shift.shift_end,
            pay_rate = %shift.pay_rate,
            "Allocated shift cost"
        );
        Ok(())
    }

    /// Current per-hour totals.
    pub fn buckets(&self) -> &HourBucketMap {
        &self.buckets
    }

    /// Consumes the accumulator, returning the per-hour totals.
    pub fn into_buckets(self) -> HourBucketMap {
        self.buckets
    }

    fn add_piece(&mut self, hour: i64, hours: Decimal, rate: Decimal) -> ReportResult<()> {
        if hours.is_zero() {
            return Ok(());
        }
        let key = u32::try_from(hour)
            .ok()
            .and_then(|h| HourKey::new(h).ok())
            .ok_or_else(|| ReportError::HourOutOfRange {
                hour: hour.to_string(),
            })?;
        let cost = rate
            .checked_mul(hours)
            .ok_or_else(|| ReportError::AmountOverflow {
                what: format!("cost for {}", key),
            })?;
        self.buckets.add(key, cost)
    }
}

fn floor_hour(time: DecimalHour) -> ReportResult<i64> {
    time.floor_hour().ok_or_else(|| ReportError::HourOutOfRange {
        hour: time.to_string(),
    })
}
