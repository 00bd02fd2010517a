//! CSV input tables.
//!
//! Both tables have a header row. Columns are matched by name, so extra
//! columns and any column order are accepted.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::calculation::build_report;
use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{HourlyReport, SaleRecord, ShiftRecord};

/// Loads the worker shift table (`start_time,end_time,break_notes,pay_rate`).
pub fn load_shifts<P: AsRef<Path>>(path: P) -> ReportResult<Vec<ShiftRecord>> {
    load_table(path.as_ref())
}

/// Loads the sales table (`time,amount`).
pub fn load_sales<P: AsRef<Path>>(path: P) -> ReportResult<Vec<SaleRecord>> {
    load_table(path.as_ref())
}

/// Loads both tables and builds the report.
///
/// ```no_run
/// use labour_report::config::ReportConfig;
/// use labour_report::input;
///
/// let report = input::run("work_shifts.csv", "transactions.csv", &ReportConfig::default())?;
/// println!("best {} worst {}", report.best_hour, report.worst_hour);
/// # Ok::<(), labour_report::error::ReportError>(())
/// ```
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    shifts_path: P,
    sales_path: Q,
    config: &ReportConfig,
) -> ReportResult<HourlyReport> {
    let shifts = load_shifts(shifts_path)?;
    let sales = load_sales(sales_path)?;
    build_report(&shifts, &sales, config)
}

fn load_table<T: DeserializeOwned>(path: &Path) -> ReportResult<Vec<T>> {
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|_| ReportError::InputNotFound {
        path: path_str.clone(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| ReportError::InputParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    debug!(path = %path_str, rows = rows.len(), "Loaded input table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourKey;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_shifts() {
        let file = write_csv(
            "break_notes,end_time,pay_rate,start_time\n\
             15-18,23:00,10.0,10:00\n\
             \"4 - 4.10PM\",23:00,20.0,18:00\n",
        );
        let shifts = load_shifts(file.path()).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0], ShiftRecord::new("10:00", "23:00", "15-18", "10.0"));
        assert_eq!(shifts[1].break_notes, "4 - 4.10PM");
    }

    #[test]
    fn test_load_sales_ignores_extra_columns() {
        let file = write_csv("amount, time, till\n100.50,17:15,2\n50,17:50,1\n");
        let sales = load_sales(file.path()).unwrap();
        assert_eq!(sales, vec![SaleRecord::new("17:15", "100.50"), SaleRecord::new("17:50", "50")]);
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let file = write_csv("time\n17:15\n");
        let result = load_sales(file.path());
        assert!(matches!(result, Err(ReportError::InputParseError { .. })));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_shifts("/nonexistent/work_shifts.csv");
        assert!(matches!(result, Err(ReportError::InputNotFound { .. })));
    }

    #[test]
    fn test_run_builds_report_from_files() {
        let shifts = write_csv("start_time,end_time,break_notes,pay_rate\n09:00,17:00,12-1pm,10.0\n");
        let sales = write_csv("time,amount\n17:15,100\n17:50,50\n09:30,40\n");
        let report = run(shifts.path(), sales.path(), &ReportConfig::default()).unwrap();

        let at = |h: u32| HourKey::new(h).unwrap();
        assert_eq!(report.sales_per_hour[at(17)], Decimal::from_str("150.00").unwrap());
        assert_eq!(report.cost_per_hour.total().unwrap(), Decimal::from_str("70").unwrap());
        assert_eq!(report.percentage_per_hour[at(9)], Decimal::from_str("25").unwrap());
        assert_eq!(report.best_hour, at(10));
        assert_eq!(report.worst_hour, at(9));
    }
}
