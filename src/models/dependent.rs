//! Dependent-like records and their change-type conditional sub-groups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::EraDate;

use super::person::PersonIdentity;

/// The per-dependent enumerated status describing how the dependent's
/// coverage is affected by the filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Coverage is unchanged; the record is informational only.
    NoChange,
    /// The dependent newly becomes covered.
    Applicable,
    /// The dependent ceases to be covered.
    NotApplicable,
    /// A correction with no coverage change; authoritative values live in
    /// the change-after sub-group.
    Change,
}

/// Conditional sub-group populated when a dependent becomes covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentStart {
    /// The date coverage begins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<EraDate>,
    /// The reason coverage begins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Free-form reason when the reason selector is "other".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_other: Option<String>,
}

/// Conditional sub-group populated when a dependent ceases to be covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentEnd {
    /// The date coverage ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<EraDate>,
    /// The reason coverage ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Free-form reason when the reason selector is "other".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_other: Option<String>,
    /// Date of death, when the end reason is death.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<EraDate>,
}

/// Corrected identity values for a [`ChangeType::Change`] record.
///
/// Carries no hard field requirements; only the fields being corrected are
/// filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeAfter {
    /// The corrected identity values.
    #[serde(default)]
    pub identity: PersonIdentity,
}

/// Whether the overseas-residency exception applies to the dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverseasExceptionStatus {
    /// The exception newly applies.
    Applicable,
    /// The exception ceases to apply.
    NotApplicable,
}

/// One leg (start or end) of the overseas-exception period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverseasPeriod {
    /// The date the exception status takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<EraDate>,
    /// The reason for the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The overseas-residency exception sub-group of a dependent record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverseasException {
    /// Whether the exception applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OverseasExceptionStatus>,
    /// Start of the exception period.
    #[serde(default)]
    pub start: OverseasPeriod,
    /// End of the exception period.
    #[serde(default)]
    pub end: OverseasPeriod,
}

/// A dependent-like record: shared identity plus a change-type selector and
/// its conditional sub-groups.
///
/// Exactly one of the three conditional groups is "active" per the current
/// change type; the others carry no required-field constraints. Switching the
/// change type never clears previously-set values, only the requirement
/// state changes (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentRecord {
    /// The dependent's identity.
    #[serde(default)]
    pub identity: PersonIdentity,
    /// The change-type selector driving required-field policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
    /// Populated when coverage begins.
    #[serde(default)]
    pub dependent_start: DependentStart,
    /// Populated when coverage ends.
    #[serde(default)]
    pub dependent_end: DependentEnd,
    /// Populated for corrections.
    #[serde(default)]
    pub change_after: ChangeAfter,
    /// The overseas-residency exception sub-group.
    #[serde(default)]
    pub overseas_exception: OverseasException,
}

/// The insured person's spouse: a dependent record plus the
/// dependent-exempt flag and income figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpouseRecord {
    /// The underlying dependent record.
    #[serde(default)]
    pub record: DependentRecord,
    /// True when a dependent-exempt spouse is present. When set, an income
    /// figure is required and the change-type requirement is removed
    /// entirely; the two requirement regimes are mutually exclusive.
    #[serde(default)]
    pub exempt_spouse: bool,
    /// The spouse's income figure, required when `exempt_spouse` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<Decimal>,
}
