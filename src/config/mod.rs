//! Configuration loading for report generation.
//!
//! # Example
//!
//! ```no_run
//! use labour_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./report.yaml").unwrap();
//! println!("Break policy: {:?}", config.config().break_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BreakPolicy, ReportConfig};
