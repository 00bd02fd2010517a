//! HTTP API module for the labour report.
//!
//! This module provides the REST endpoint that builds an hourly report from
//! posted shift and sales rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReportRequest, ReportResponse};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
