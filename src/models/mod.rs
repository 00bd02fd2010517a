//! Core data models for the labour report.
//!
//! This module contains all the domain models used throughout the crate.

mod buckets;
mod hour;
mod records;
mod report;

pub use buckets::{HourBucketMap, PercentageMap};
pub use hour::{DecimalHour, HOURS_IN_DAY, HourKey};
pub use records::{SaleRecord, ShiftRecord};
pub use report::{HourlyReport, ParsedShift, WorkerCost};
