//! The full report pipeline.
//!
//! Shift records are parsed and folded into a [`CostAccumulator`]; sales are
//! aggregated independently; both rounded maps then feed the percentage
//! and best/worst analysis. Any record that fails to parse aborts the run.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::{BreakPolicy, ReportConfig};
use crate::error::{ReportError, ReportResult, Table};
use crate::models::{
    HourBucketMap, HourlyReport, ParsedShift, SaleRecord, ShiftRecord, WorkerCost,
};

use super::break_notes::parse_break;
use super::cost_allocation::CostAccumulator;
use super::percentage::{best_and_worst_hour, compute_percentage};
use super::sales_aggregation::{aggregate_sales, parse_decimal};
use super::shift_time::parse_shift_times;

/// Parses one shift record into decimal hours and a pay rate.
///
/// # Example
///
/// ```
/// use labour_report::calculation::parse_shift;
/// use labour_report::config::ReportConfig;
/// use labour_report::models::{DecimalHour, ShiftRecord};
///
/// let record = ShiftRecord::new("09:00", "17:00", "12-1pm", "10.0");
/// let shift = parse_shift(&record, &ReportConfig::default()).unwrap();
/// assert_eq!(shift.break_start, DecimalHour::from_hm(12, 0));
/// assert_eq!(shift.break_end, DecimalHour::from_hm(13, 0));
/// ```
pub fn parse_shift(record: &ShiftRecord, config: &ReportConfig) -> ReportResult<ParsedShift> {
    let (shift_start, shift_end) =
        parse_shift_times(&record.start_time, &record.end_time, config.lenient_minutes)?;
    let (break_start, break_end) = parse_break(&record.break_notes, shift_start)?;

    let pay_rate = parse_decimal("pay_rate", &record.pay_rate)?;
    if pay_rate.is_sign_negative() && !pay_rate.is_zero() {
        return Err(ReportError::InvalidNumber {
            field: "pay_rate".to_string(),
            value: record.pay_rate.clone(),
        });
    }

    let shift = ParsedShift {
        shift_start,
        shift_end,
        break_start,
        break_end,
        pay_rate,
    };

    if config.break_policy == BreakPolicy::Reject && !shift.break_within_shift() {
        return Err(ReportError::InvalidShift {
            message: format!(
                "break {}-{} is outside shift {}-{}",
                break_start, break_end, shift_start, shift_end
            ),
        });
    }
    Ok(shift)
}

/// Labour cost per hour plus the per-worker summary, both rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCosts {
    /// Labour cost per hour across all workers.
    pub cost_per_hour: HourBucketMap,
    /// One entry per shift record, in input order.
    pub workers: Vec<WorkerCost>,
}

/// Parses every shift and allocates its cost into hourly buckets.
pub fn process_shifts(
    records: &[ShiftRecord],
    config: &ReportConfig,
) -> ReportResult<ShiftCosts> {
    let places = config.decimal_places;
    let mut costs = CostAccumulator::new();
    let mut workers = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        let (shift, cost) = parse_shift(record, config)
            .and_then(|shift| {
                costs.add_shift(&shift)?;
                Ok((shift, shift.day_cost()?))
            })
            .map_err(|e| e.in_record(Table::Shifts, row))?;

        workers.push(WorkerCost {
            row,
            shift,
            worked_hours: shift.worked_hours().round_dp(places),
            cost: cost.round_dp(places),
        });
    }

    Ok(ShiftCosts {
        cost_per_hour: costs.into_buckets().rounded(places),
        workers,
    })
}

/// Aggregates every sale into hourly buckets, rounded.
pub fn process_sales(
    records: &[SaleRecord],
    config: &ReportConfig,
) -> ReportResult<HourBucketMap> {
    Ok(aggregate_sales(records)?.rounded(config.decimal_places))
}

/// Runs the whole pipeline over in-memory tables.
///
/// # Example
///
/// ```
/// use labour_report::calculation::build_report;
/// use labour_report::config::ReportConfig;
/// use labour_report::models::{SaleRecord, ShiftRecord};
///
/// let shifts = vec![ShiftRecord::new("16:00", "23:00", "19-19.30", "12")];
/// let sales = vec![SaleRecord::new("17:10", "120"), SaleRecord::new("20:45", "30")];
///
/// let report = build_report(&shifts, &sales, &ReportConfig::default()).unwrap();
/// assert_eq!(report.best_hour.to_string(), "16:00");
/// assert_eq!(report.worst_hour.to_string(), "20:00");
/// ```
pub fn build_report(
    shifts: &[ShiftRecord],
    sales: &[SaleRecord],
    config: &ReportConfig,
) -> ReportResult<HourlyReport> {
    let result = build(shifts, sales, config);
    match &result {
        Ok(report) => info!(
            shifts = shifts.len(),
            sales = sales.len(),
            total_cost = %report.total_cost,
            total_sales = %report.total_sales,
            best_hour = %report.best_hour,
            worst_hour = %report.worst_hour,
            "Report completed"
        ),
        Err(err) => warn!(error = %err, "Report failed"),
    }
    result
}

fn build(
    shifts: &[ShiftRecord],
    sales: &[SaleRecord],
    config: &ReportConfig,
) -> ReportResult<HourlyReport> {
    let ShiftCosts {
        cost_per_hour,
        workers,
    } = process_shifts(shifts, config)?;
    let sales_per_hour = process_sales(sales, config)?;

    let percentage_per_hour =
        compute_percentage(&cost_per_hour, &sales_per_hour, config.decimal_places)?;
    let (best_hour, worst_hour) = best_and_worst_hour(&percentage_per_hour);

    let total_cost = workers
        .iter()
        .try_fold(Decimal::ZERO, |sum, worker| sum.checked_add(worker.cost))
        .ok_or_else(|| ReportError::AmountOverflow {
            what: "total cost".to_string(),
        })?;
    let total_sales = sales_per_hour.total()?;

    Ok(HourlyReport {
        cost_per_hour,
        sales_per_hour,
        percentage_per_hour,
        best_hour,
        worst_hour,
        workers,
        total_cost,
        total_sales,
    })
}
