//! Valid-month filtering and reward averaging for assessment and revision.

use rust_decimal::Decimal;

use crate::models::RewardPeriodGroup;

use super::monthly_total::recompute_salary_total;

/// The statutory base-days threshold: months with fewer paid working days
/// are excluded from reward averaging.
pub const VALID_MONTH_MIN_BASE_DAYS: u32 = 17;

/// The derived aggregates of one reward period group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardAggregates {
    /// Number of valid months in the window.
    pub valid_months: usize,
    /// Sum of the totals of valid months.
    pub total: Decimal,
    /// Floored average over valid months; absent with zero valid months.
    pub average: Option<Decimal>,
    /// Floored average after deducting all retroactive payments; absent
    /// with zero valid months.
    pub adjusted_average: Option<Decimal>,
}

/// Recalculates all derived fields of a reward period group in place and
/// returns the resulting aggregates.
///
/// Each salary month's `total` is recomputed first, then the group
/// aggregates are derived:
///
/// - A month is valid iff its base days reach
///   [`VALID_MONTH_MIN_BASE_DAYS`] and its total is present.
/// - `total` is the sum of valid-month totals (zero when none are valid).
/// - `average` is `floor(total / valid_months)`, absent with zero
///   valid months.
/// - `adjusted_average` is
///   `floor((total - sum of retroactive payments) / valid_months)`,
///   absent with zero valid months. The adjusted numerator may go negative
///   when retroactive payments exceed the total; the flooring then rounds
///   toward negative infinity.
///
/// # Example
///
/// ```
/// use filing_engine::calculation::recalculate_period_group;
/// use filing_engine::models::RewardPeriodGroup;
/// use rust_decimal::Decimal;
///
/// let mut group = RewardPeriodGroup::default();
/// group.salary_months[0].base_days = Some(20);
/// group.salary_months[0].currency = Some(Decimal::new(300_000, 0));
/// group.salary_months[1].base_days = Some(15); // below threshold
/// group.salary_months[1].currency = Some(Decimal::new(300_000, 0));
/// group.salary_months[2].base_days = Some(30);
/// group.salary_months[2].currency = Some(Decimal::new(330_000, 0));
///
/// let aggregates = recalculate_period_group(&mut group);
/// assert_eq!(aggregates.valid_months, 2);
/// assert_eq!(group.total, Decimal::new(630_000, 0));
/// assert_eq!(group.average, Some(Decimal::new(315_000, 0)));
/// ```
pub fn recalculate_period_group(group: &mut RewardPeriodGroup) -> RewardAggregates {
    for month in group.salary_months.iter_mut() {
        recompute_salary_total(month);
    }

    let valid_totals: Vec<Decimal> = group
        .salary_months
        .iter()
        .filter(|m| m.base_days.is_some_and(|d| d >= VALID_MONTH_MIN_BASE_DAYS))
        .filter_map(|m| m.total)
        .collect();

    let valid_months = valid_totals.len();
    let total: Decimal = valid_totals.iter().sum();

    let retroactive_sum: Decimal = group
        .retroactive_payments
        .iter()
        .filter_map(|p| p.amount)
        .sum();

    let (average, adjusted_average) = if valid_months > 0 {
        let divisor = Decimal::from(valid_months as u64);
        (
            Some((total / divisor).floor()),
            Some(((total - retroactive_sum) / divisor).floor()),
        )
    } else {
        (None, None)
    };

    group.total = total;
    group.average = average;
    group.adjusted_average = adjusted_average;

    RewardAggregates {
        valid_months,
        total,
        average,
        adjusted_average,
    }
}
