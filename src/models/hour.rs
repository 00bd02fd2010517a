//! Hour keys and decimal-hour values.
//!
//! Every report mapping is indexed by the 24 clock hours of a single
//! business day. [`HourKey`] is that index and renders as `"H:00"`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ReportError, ReportResult};

/// Number of hour buckets in a business day.
pub const HOURS_IN_DAY: usize = 24;

/// The start of a one-hour bucket, `0:00` through `23:00`.
///
/// # Example
///
/// ```
/// use labour_report::models::HourKey;
///
/// let key = HourKey::new(17).unwrap();
/// assert_eq!(key.to_string(), "17:00");
/// assert!(HourKey::new(24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourKey(u8);

impl HourKey {
    /// The first bucket of the day, `0:00`.
    pub const MIDNIGHT: HourKey = HourKey(0);

    /// Creates a key for the given hour, which must be below 24.
    pub fn new(hour: u32) -> ReportResult<Self> {
        if (hour as usize) < HOURS_IN_DAY {
            Ok(HourKey(hour as u8))
        } else {
            Err(ReportError::HourOutOfRange {
                hour: hour.to_string(),
            })
        }
    }

    /// Iterates all 24 keys in clock order.
    pub fn all() -> impl Iterator<Item = HourKey> {
        (0..HOURS_IN_DAY as u8).map(HourKey)
    }

    /// The hour as an integer, 0 through 23.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for HourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl FromStr for HourKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hour = s
            .strip_suffix(":00")
            .and_then(|h| h.parse::<u32>().ok())
            .ok_or_else(|| ReportError::InvalidTimeFormat {
                value: s.to_string(),
            })?;
        HourKey::new(hour)
    }
}

impl Serialize for HourKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HourKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Hours since midnight as a decimal, e.g. `17.5` for 17:30.
///
/// Shift and break boundaries are all normalized to this representation
/// before any cost is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalHour(Decimal);

impl DecimalHour {
    /// Midnight at the end of the business day.
    pub const END_OF_DAY: DecimalHour = DecimalHour(Decimal::from_parts(24, 0, 0, false, 0));

    /// Builds a value from clock hours and minutes: `hours + minutes / 60`.
    ///
    /// ```
    /// use labour_report::models::DecimalHour;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DecimalHour::from_hm(17, 30).value(), Decimal::new(175, 1));
    /// ```
    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        DecimalHour(Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60))
    }

    /// The underlying decimal.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Shifts the value twelve hours later (a.m. to p.m.).
    pub fn plus_twelve(self) -> Self {
        DecimalHour(self.0 + Decimal::from(12))
    }

    /// The clock hour this value falls in, as a signed integer.
    ///
    /// Returns `None` only for values too large to represent.
    pub fn floor_hour(self) -> Option<i64> {
        self.0.floor().to_i64()
    }
}

impl fmt::Display for DecimalHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_in_clock_order() {
        let keys: Vec<String> = HourKey::all().map(|k| k.to_string()).collect();
        assert_eq!(keys.len(), 24);
        assert_eq!(keys[0], "0:00");
        assert_eq!(keys[9], "9:00");
        assert_eq!(keys[23], "23:00");
    }

    #[test]
    fn test_key_round_trips_through_text() {
        let key: HourKey = "22:00".parse().unwrap();
        assert_eq!(key.hour(), 22);
        assert!("22:30".parse::<HourKey>().is_err());
        assert!("24:00".parse::<HourKey>().is_err());
    }

    #[test]
    fn test_key_serializes_as_label() {
        let json = serde_json::to_string(&HourKey::new(5).unwrap()).unwrap();
        assert_eq!(json, "\"5:00\"");
    }

    #[test]
    fn test_decimal_hour_thirds() {
        let value = DecimalHour::from_hm(9, 20).value();
        assert!((value - Decimal::new(9_3333, 4)).abs() < Decimal::new(1, 4));
    }

    #[test]
    fn test_floor_hour() {
        assert_eq!(DecimalHour::from_hm(13, 59).floor_hour(), Some(13));
        assert_eq!(DecimalHour::END_OF_DAY.floor_hour(), Some(24));
    }
}
