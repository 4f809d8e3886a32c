//! Salary-period models for standard-reward assessment and revision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One salary month inside a reward period group.
///
/// `total` is a derived field maintained by the calculation engine
/// (see [`crate::calculation::recompute_salary_total`]); it is the sum of
/// the currency and in-kind amounts with absent inputs treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryMonth {
    /// The calendar month (1 to 12) this entry covers.
    pub month: u32,
    /// The number of paid working days in the period. Months below the
    /// statutory threshold are excluded from reward averaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_days: Option<u32>,
    /// Remuneration paid in currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Decimal>,
    /// Remuneration paid in kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_kind: Option<Decimal>,
    /// Derived: currency plus in-kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

/// A retroactive payment attributed to one month of the period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetroactivePayment {
    /// The calendar month (1 to 12) the payment is attributed to.
    pub month: u32,
    /// The payment amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// The three-month salary window of one person on an assessment or
/// revision filing, plus its derived aggregates.
///
/// The statutory window is exactly three salary months and three
/// retroactive-payment slots, which the fixed-size arrays enforce
/// structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPeriodGroup {
    /// The three salary months of the window.
    pub salary_months: [SalaryMonth; 3],
    /// The three retroactive-payment slots of the window.
    pub retroactive_payments: [RetroactivePayment; 3],
    /// Derived: sum of the totals of valid months (zero when none are valid).
    #[serde(default)]
    pub total: Decimal,
    /// Derived: floored average over valid months; absent with zero
    /// valid months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Decimal>,
    /// Derived: floored average after deducting retroactive payments;
    /// absent with zero valid months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_average: Option<Decimal>,
}

impl RewardPeriodGroup {
    /// Creates an empty period group covering the given three months.
    ///
    /// # Example
    ///
    /// ```
    /// use filing_engine::models::RewardPeriodGroup;
    ///
    /// let group = RewardPeriodGroup::for_months([4, 5, 6]);
    /// assert_eq!(group.salary_months[0].month, 4);
    /// assert!(group.average.is_none());
    /// ```
    pub fn for_months(months: [u32; 3]) -> Self {
        RewardPeriodGroup {
            salary_months: months.map(|month| SalaryMonth {
                month,
                ..Default::default()
            }),
            retroactive_payments: months.map(|month| RetroactivePayment {
                month,
                ..Default::default()
            }),
            total: Decimal::ZERO,
            average: None,
            adjusted_average: None,
        }
    }
}

impl Default for RewardPeriodGroup {
    fn default() -> Self {
        // The assessment window runs April through June.
        RewardPeriodGroup::for_months([4, 5, 6])
    }
}
