//! Hour-indexed value mappings.
//!
//! [`HourBucketMap`] always holds a value for each of the 24 hours, starting
//! at zero, so consumers can index any [`HourKey`] without existence checks.

use std::collections::HashMap;
use std::ops::Index;

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ReportError, ReportResult};

use super::hour::{HOURS_IN_DAY, HourKey};

/// Accumulated decimal amounts (cost or sales) for each hour of the day.
///
/// Serializes as a JSON object keyed `"0:00"` through `"23:00"` in clock
/// order.
///
/// # Example
///
/// ```
/// use labour_report::models::{HourBucketMap, HourKey};
/// use rust_decimal::Decimal;
///
/// let mut sales = HourBucketMap::new();
/// let five_pm = HourKey::new(17).unwrap();
/// sales.add(five_pm, Decimal::new(100, 0))?;
/// sales.add(five_pm, Decimal::new(50, 0))?;
/// assert_eq!(sales[five_pm], Decimal::new(150, 0));
/// assert_eq!(sales.total()?, Decimal::new(150, 0));
/// # Ok::<(), labour_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBucketMap {
    values: [Decimal; HOURS_IN_DAY],
}

/// Cost-to-sales percentages per hour.
///
/// A negative value is the uncovered cost of an hour with no sales.
pub type PercentageMap = HourBucketMap;

impl HourBucketMap {
    /// Creates a mapping with every hour at zero.
    pub fn new() -> Self {
        Self {
            values: [Decimal::ZERO; HOURS_IN_DAY],
        }
    }

    /// Adds `amount` to the given hour's bucket.
    ///
    /// Fails with `AmountOverflow` when the bucket cannot hold the sum; the
    /// bucket is left unchanged.
    pub fn add(&mut self, hour: HourKey, amount: Decimal) -> ReportResult<()> {
        let bucket = &mut self.values[hour.index()];
        *bucket = bucket
            .checked_add(amount)
            .ok_or_else(|| ReportError::AmountOverflow {
                what: format!("bucket {}", hour),
            })?;
        Ok(())
    }

    /// Replaces the given hour's value.
    pub fn set(&mut self, hour: HourKey, value: Decimal) {
        self.values[hour.index()] = value;
    }

    /// Returns the value for an hour.
    pub fn get(&self, hour: HourKey) -> Decimal {
        self.values[hour.index()]
    }

    /// Iterates `(hour, value)` pairs in clock order.
    pub fn iter(&self) -> impl Iterator<Item = (HourKey, Decimal)> + '_ {
        HourKey::all().map(move |hour| (hour, self.get(hour)))
    }

    /// Sum of all 24 buckets.
    pub fn total(&self) -> ReportResult<Decimal> {
        self.values
            .iter()
            .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))
            .ok_or_else(|| ReportError::AmountOverflow {
                what: "total of all hours".to_string(),
            })
    }

    /// Returns a copy with every bucket rounded to `places` decimal places.
    ///
    /// Zero buckets stay exactly zero.
    pub fn rounded(&self, places: u32) -> Self {
        let mut values = self.values;
        for value in values.iter_mut() {
            *value = value.round_dp(places);
        }
        Self { values }
    }
}

impl Default for HourBucketMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<HourKey> for HourBucketMap {
    type Output = Decimal;

    fn index(&self, hour: HourKey) -> &Decimal {
        &self.values[hour.index()]
    }
}

impl Serialize for HourBucketMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS_IN_DAY))?;
        for (hour, value) in self.iter() {
            map.serialize_entry(&hour, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HourBucketMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = HashMap::<HourKey, Decimal>::deserialize(deserializer)?;
        let mut map = HourBucketMap::new();
        for (hour, value) in entries {
            map.set(hour, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hour(h: u32) -> HourKey {
        HourKey::new(h).unwrap()
    }

    #[test]
    fn test_new_map_is_fully_populated_with_zero() {
        let map = HourBucketMap::new();
        assert_eq!(map.iter().count(), 24);
        assert!(map.iter().all(|(_, v)| v == Decimal::ZERO));
    }

    #[test]
    fn test_rounding_applies_per_bucket() {
        let mut map = HourBucketMap::new();
        map.add(hour(9), dec("3.333333")).unwrap();
        map.add(hour(10), dec("0.125")).unwrap();
        let rounded = map.rounded(2);
        assert_eq!(rounded[hour(9)], dec("3.33"));
        // banker's rounding on the midpoint
        assert_eq!(rounded[hour(10)], dec("0.12"));
        assert_eq!(rounded[hour(11)], Decimal::ZERO);
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        let mut map = HourBucketMap::new();
        map.add(hour(9), Decimal::MAX).unwrap();
        let result = map.add(hour(9), Decimal::ONE);
        assert!(matches!(result, Err(ReportError::AmountOverflow { .. })));
        assert_eq!(map[hour(9)], Decimal::MAX);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut map = HourBucketMap::new();
        map.set(hour(9), Decimal::MAX);
        map.set(hour(10), Decimal::MAX);
        assert!(matches!(
            map.total(),
            Err(ReportError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_serializes_in_clock_order() {
        let mut map = HourBucketMap::new();
        map.add(hour(17), dec("150")).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with("{\"0:00\":\"0\",\"1:00\":\"0\""));
        assert!(json.contains("\"17:00\":\"150\""));
        assert!(json.ends_with("\"23:00\":\"0\"}"));
    }

    #[test]
    fn test_deserializes_from_label_map() {
        let map: HourBucketMap =
            serde_json::from_str(r#"{"17:00": "150.00", "22:00": "-40"}"#).unwrap();
        assert_eq!(map[hour(17)], dec("150.00"));
        assert_eq!(map[hour(22)], dec("-40"));
        assert_eq!(map[hour(0)], Decimal::ZERO);
    }
}
