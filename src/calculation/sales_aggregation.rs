//! Sales aggregation per hour.
//!
//! Each transaction is attributed wholly to the clock hour in its `time`
//! column; minutes are ignored.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ReportError, ReportResult, Table};
use crate::models::{HourBucketMap, HourKey, SaleRecord};

/// Extracts the hour from a transaction time such as `"17:32"` or `"17"`.
///
/// The text must start with digits, followed by `:` or nothing.
///
/// ```
/// use labour_report::calculation::parse_sale_hour;
///
/// assert_eq!(parse_sale_hour("17:32").unwrap().hour(), 17);
/// assert_eq!(parse_sale_hour("9").unwrap().hour(), 9);
/// assert!(parse_sale_hour("noon").is_err());
/// assert!(parse_sale_hour("24:05").is_err());
/// ```
pub fn parse_sale_hour(time: &str) -> ReportResult<HourKey> {
    let digits_end = time
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(time.len());
    let (digits, rest) = time.split_at(digits_end);

    if digits.is_empty() || !(rest.is_empty() || rest.starts_with(':')) {
        return Err(ReportError::InvalidTimeFormat {
            value: time.to_string(),
        });
    }

    let hour = digits.parse::<u32>().map_err(|_| ReportError::HourOutOfRange {
        hour: digits.to_string(),
    })?;
    HourKey::new(hour)
}

/// Parses a decimal column value, naming the column on failure.
pub(crate) fn parse_decimal(field: &str, value: &str) -> ReportResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| ReportError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Sums transaction amounts into per-hour buckets.
///
/// Fails on the first record whose time or amount does not parse; the
/// error names the record's row.
///
/// # Example
///
/// ```
/// use labour_report::calculation::aggregate_sales;
/// use labour_report::models::{HourKey, SaleRecord};
/// use rust_decimal::Decimal;
///
/// let sales = aggregate_sales(&[
///     SaleRecord::new("17:15", "100"),
///     SaleRecord::new("17:50", "50"),
/// ])
/// .unwrap();
/// assert_eq!(sales[HourKey::new(17).unwrap()], Decimal::new(150, 0));
/// ```
pub fn aggregate_sales(records: &[SaleRecord]) -> ReportResult<HourBucketMap> {
    records
        .iter()
        .enumerate()
        .try_fold(HourBucketMap::new(), |mut sales, (row, record)| {
            add_sale(&mut sales, record).map_err(|e| e.in_record(Table::Sales, row))?;
            Ok(sales)
        })
        .inspect(|_| debug!(records = records.len(), "Aggregated sales"))
}

fn add_sale(sales: &mut HourBucketMap, record: &SaleRecord) -> ReportResult<()> {
    let hour = parse_sale_hour(&record.time)?;
    let amount = parse_decimal("amount", &record.amount)?;
    sales.add(hour, amount)
}
