//! Calculation logic for the labour report.
//!
//! This module contains shift time and break notes parsing, hourly cost
//! allocation, sales aggregation, the cost-to-sales percentage and best/worst
//! hour analysis, and the pipeline that ties them together.

mod break_notes;
mod cost_allocation;
mod percentage;
mod report;
mod sales_aggregation;
mod shift_time;

pub use break_notes::{BreakEndpoint, BreakNotes, Meridiem, parse_break};
pub use cost_allocation::CostAccumulator;
pub use percentage::{best_and_worst_hour, compute_percentage};
pub use report::{ShiftCosts, build_report, parse_shift, process_sales, process_shifts};
pub use sales_aggregation::{aggregate_sales, parse_sale_hour};
pub use shift_time::{parse_shift_time, parse_shift_times};
