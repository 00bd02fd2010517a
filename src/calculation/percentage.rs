//! Labour cost percentages and best/worst hour detection.

use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};
use crate::models::{HourBucketMap, HourKey, PercentageMap};

/// Computes labour cost as a percentage of sales for each hour.
///
/// - No cost: `0`, whatever the sales.
/// - Cost but no sales: `-cost`, flagging an hour that earned nothing.
/// - Otherwise: `cost / sales × 100`, rounded to `places`.
///
/// A ratio too large for a decimal is `AmountOverflow`.
///
/// # Example
///
/// ```
/// use labour_report::calculation::compute_percentage;
/// use labour_report::models::{HourBucketMap, HourKey};
/// use rust_decimal::Decimal;
///
/// let (five_pm, ten_pm) = (HourKey::new(17).unwrap(), HourKey::new(22).unwrap());
/// let mut cost = HourBucketMap::new();
/// cost.add(five_pm, Decimal::new(50, 0))?;
/// cost.add(ten_pm, Decimal::new(40, 0))?;
/// let mut sales = HourBucketMap::new();
/// sales.add(five_pm, Decimal::new(250, 0))?;
///
/// let percentages = compute_percentage(&cost, &sales, 2)?;
/// assert_eq!(percentages[five_pm], Decimal::new(20, 0));
/// assert_eq!(percentages[ten_pm], Decimal::new(-40, 0));
/// # Ok::<(), labour_report::error::ReportError>(())
/// ```
pub fn compute_percentage(
    cost: &HourBucketMap,
    sales: &HourBucketMap,
    places: u32,
) -> ReportResult<PercentageMap> {
    let mut percentages = PercentageMap::new();
    for (hour, hour_cost) in cost.iter() {
        let hour_sales = sales[hour];
        let value = if hour_cost.is_zero() {
            Decimal::ZERO
        } else if hour_sales.is_zero() {
            -hour_cost
        } else {
            hour_cost
                .checked_div(hour_sales)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| ReportError::AmountOverflow {
                    what: format!("percentage for {}", hour),
                })?
                .round_dp(places)
        };
        percentages.set(hour, value);
    }
    Ok(percentages)
}

/// Returns `(best, worst)`: the hours with the lowest and highest percentage.
///
/// Ties go to the earliest hour. Negative no-sales values count as low, so
/// an hour with a large uncovered cost can come out as the best.
///
/// # Example
///
/// ```
/// use labour_report::calculation::best_and_worst_hour;
/// use labour_report::models::{HourKey, PercentageMap};
/// use rust_decimal::Decimal;
///
/// let mut percentages = PercentageMap::new();
/// percentages.set(HourKey::new(18).unwrap(), Decimal::new(-5, 0));
/// percentages.set(HourKey::new(20).unwrap(), Decimal::new(45, 0));
///
/// let (best, worst) = best_and_worst_hour(&percentages);
/// assert_eq!(best.to_string(), "18:00");
/// assert_eq!(worst.to_string(), "20:00");
/// ```
pub fn best_and_worst_hour(percentages: &PercentageMap) -> (HourKey, HourKey) {
    let (mut best, mut worst) = (HourKey::MIDNIGHT, HourKey::MIDNIGHT);
    for (hour, value) in percentages.iter().skip(1) {
        if value < percentages[best] {
            best = hour;
        }
        if value > percentages[worst] {
            worst = hour;
        }
    }
    (best, worst)
}
