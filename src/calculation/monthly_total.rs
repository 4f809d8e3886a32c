//! Monthly salary total derivation.

use rust_decimal::Decimal;

use crate::models::SalaryMonth;

/// Recomputes the derived `total` of a salary month.
///
/// The total is the sum of the currency and in-kind amounts with absent
/// inputs treated as zero. While *both* inputs are absent the total stays
/// absent, so the "total present" validity test used by reward averaging
/// remains meaningful for untouched months.
///
/// This is a plain derived-field assignment, triggered on every change to
/// either input; it reads nothing but the two inputs and so cannot
/// retrigger itself.
///
/// # Example
///
/// ```
/// use filing_engine::calculation::recompute_salary_total;
/// use filing_engine::models::SalaryMonth;
/// use rust_decimal::Decimal;
///
/// let mut month = SalaryMonth {
///     month: 4,
///     currency: Some(Decimal::new(300_000, 0)),
///     in_kind: None,
///     ..Default::default()
/// };
/// recompute_salary_total(&mut month);
/// assert_eq!(month.total, Some(Decimal::new(300_000, 0)));
/// ```
pub fn recompute_salary_total(month: &mut SalaryMonth) {
    if month.currency.is_none() && month.in_kind.is_none() {
        month.total = None;
        return;
    }

    let currency = month.currency.unwrap_or(Decimal::ZERO);
    let in_kind = month.in_kind.unwrap_or(Decimal::ZERO);
    month.total = Some(currency + in_kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    /// MT-001: total is currency plus in-kind
    #[test]
    fn test_total_sums_both_components() {
        let mut month = SalaryMonth {
            month: 4,
            currency: Some(dec(300_000)),
            in_kind: Some(dec(12_000)),
            ..Default::default()
        };
        recompute_salary_total(&mut month);
        assert_eq!(month.total, Some(dec(312_000)));
    }

    /// MT-002: an absent component counts as zero
    #[test]
    fn test_absent_component_treated_as_zero() {
        let mut month = SalaryMonth {
            month: 5,
            currency: None,
            in_kind: Some(dec(8_000)),
            ..Default::default()
        };
        recompute_salary_total(&mut month);
        assert_eq!(month.total, Some(dec(8_000)));
    }

    /// MT-003: both components absent leaves the total absent
    #[test]
    fn test_untouched_month_has_no_total() {
        let mut month = SalaryMonth {
            month: 6,
            ..Default::default()
        };
        recompute_salary_total(&mut month);
        assert_eq!(month.total, None);
    }

    /// MT-004: clearing both inputs clears a previously-derived total
    #[test]
    fn test_clearing_inputs_clears_total() {
        let mut month = SalaryMonth {
            month: 4,
            currency: Some(dec(300_000)),
            total: Some(dec(300_000)),
            ..Default::default()
        };
        month.currency = None;
        recompute_salary_total(&mut month);
        assert_eq!(month.total, None);
    }

    /// MT-005: recomputation is idempotent
    #[test]
    fn test_recomputation_is_idempotent() {
        let mut month = SalaryMonth {
            month: 4,
            currency: Some(dec(250_000)),
            in_kind: Some(dec(5_000)),
            ..Default::default()
        };
        recompute_salary_total(&mut month);
        let first = month.clone();
        recompute_salary_total(&mut month);
        assert_eq!(month, first);
    }
}
