//! Bonus-payment models for the bonus payment report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::person::PersonIdentity;

/// The currency and in-kind components of one bonus payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAmount {
    /// Bonus paid in currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Decimal>,
    /// Bonus paid in kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_kind: Option<Decimal>,
}

/// One person's row on a bonus payment report.
///
/// `bonus_amount` is derived by the calculation engine: the payment sum
/// truncated down to the nearest 1,000 (see
/// [`crate::calculation::bonus_amount`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPaymentPerson {
    /// The person's identity (reduced shape: name, birth date, identification).
    #[serde(default)]
    pub identity: PersonIdentity,
    /// The payment amounts.
    #[serde(default)]
    pub payment: PaymentAmount,
    /// Derived: statutory bonus amount after truncation to the nearest
    /// lower multiple of 1,000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_amount: Option<Decimal>,
}
