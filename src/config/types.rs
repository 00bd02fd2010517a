//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML file. Every field has a default so an empty
//! file, or no file at all, yields [`ReportConfig::default`].

use serde::{Deserialize, Serialize};

/// What to do with a break that does not lie inside its shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakPolicy {
    /// Allocate anyway; a break outside the shift produces negative cost.
    #[default]
    Preserve,
    /// Reject the record with an invalid shift error.
    Reject,
}

/// Settings that tune parsing and rounding.
///
/// # Example
///
/// ```
/// use labour_report::config::{BreakPolicy, ReportConfig};
///
/// let config: ReportConfig = serde_yaml::from_str("break_policy: reject").unwrap();
/// assert_eq!(config.break_policy, BreakPolicy::Reject);
/// assert_eq!(config.decimal_places, 2);
/// assert!(!config.lenient_minutes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Decimal places every reported value is rounded to.
    pub decimal_places: u32,
    /// Accept shift minutes 60-69, as older spreadsheets sometimes contain.
    pub lenient_minutes: bool,
    /// Handling of breaks outside the shift.
    pub break_policy: BreakPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            lenient_minutes: false,
            break_policy: BreakPolicy::Preserve,
        }
    }
}
