//! Request and response bodies for the `/report` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{HourlyReport, SaleRecord, ShiftRecord};

/// Request body for the `/report` endpoint.
///
/// Rows use the same column names as the CSV tables, with every value as
/// text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The worker shift rows.
    pub shifts: Vec<ShiftRecord>,
    /// The sales transaction rows.
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

/// Successful response body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Identifier logged with every line for this request.
    pub correlation_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The report itself.
    #[serde(flatten)]
    pub report: HourlyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "shifts": [
                {"start_time": "09:00", "end_time": "17:00", "break_notes": "12-1pm", "pay_rate": "10.0"}
            ],
            "sales": [
                {"time": "17:15", "amount": "100"}
            ]
        }"#;
        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shifts.len(), 1);
        assert_eq!(request.sales[0].amount, "100");
    }

    #[test]
    fn test_sales_default_to_empty() {
        let request: ReportRequest = serde_json::from_str(r#"{"shifts": []}"#).unwrap();
        assert!(request.sales.is_empty());
    }

    #[test]
    fn test_shifts_are_required() {
        let result: Result<ReportRequest, _> = serde_json::from_str(r#"{"sales": []}"#);
        assert!(result.is_err());
    }
}
