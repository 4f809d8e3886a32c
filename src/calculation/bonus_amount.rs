//! Statutory bonus-amount truncation.

use rust_decimal::Decimal;

use crate::models::BonusPaymentPerson;

/// Truncates a bonus payment sum to the nearest lower multiple of 1,000,
/// per the statutory bonus-amount rounding rule.
///
/// Absent components count as zero. The rule is independent of the monthly
/// averaging rule used for standard rewards.
///
/// # Example
///
/// ```
/// use filing_engine::calculation::bonus_amount;
/// use rust_decimal::Decimal;
///
/// let amount = bonus_amount(Some(Decimal::new(512_345, 0)), None);
/// assert_eq!(amount, Decimal::new(512_000, 0));
/// ```
pub fn bonus_amount(currency: Option<Decimal>, in_kind: Option<Decimal>) -> Decimal {
    let sum = currency.unwrap_or(Decimal::ZERO) + in_kind.unwrap_or(Decimal::ZERO);
    let thousand = Decimal::new(1_000, 0);
    (sum / thousand).floor() * thousand
}

/// Recomputes the derived `bonus_amount` of one bonus payment row in place.
///
/// Absent while both payment components are absent, mirroring the
/// salary-month total rule.
pub fn recompute_bonus_amount(person: &mut BonusPaymentPerson) {
    if person.payment.currency.is_none() && person.payment.in_kind.is_none() {
        person.bonus_amount = None;
        return;
    }
    person.bonus_amount = Some(bonus_amount(person.payment.currency, person.payment.in_kind));
}
