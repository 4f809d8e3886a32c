//! Field paths of a dependent-like record, for requirement policies.

use serde::{Deserialize, Serialize};

/// A field of a dependent-like record that a requirement policy can name.
///
/// Ordered so requirement sets have a stable iteration order in error
/// messages and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPath {
    /// The change-type selector itself.
    ChangeType,
    /// Family name.
    LastName,
    /// Given name.
    FirstName,
    /// Family name kana reading.
    LastNameKana,
    /// Given name kana reading.
    FirstNameKana,
    /// Birth date.
    BirthDate,
    /// Recorded gender.
    Gender,
    /// Relationship to the insured person.
    Relationship,
    /// Statutory identification number.
    Identification,
    /// Postal code.
    PostalCode,
    /// Prefecture.
    Prefecture,
    /// City or ward.
    City,
    /// Street-level address.
    Street,
    /// Coverage start date.
    DependentStartDate,
    /// Coverage start reason.
    DependentStartReason,
    /// Coverage end date.
    DependentEndDate,
    /// Coverage end reason.
    DependentEndReason,
    /// Overseas-exception status selector.
    OverseasExceptionStatus,
    /// Overseas-exception start date.
    OverseasStartDate,
    /// Overseas-exception start reason.
    OverseasStartReason,
    /// Overseas-exception end date.
    OverseasEndDate,
    /// Overseas-exception end reason.
    OverseasEndReason,
    /// The spouse's income figure (spouse records only).
    SpouseIncome,
}

impl FieldPath {
    /// The stable snake_case path string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::ChangeType => "change_type",
            FieldPath::LastName => "last_name",
            FieldPath::FirstName => "first_name",
            FieldPath::LastNameKana => "last_name_kana",
            FieldPath::FirstNameKana => "first_name_kana",
            FieldPath::BirthDate => "birth_date",
            FieldPath::Gender => "gender",
            FieldPath::Relationship => "relationship",
            FieldPath::Identification => "identification",
            FieldPath::PostalCode => "postal_code",
            FieldPath::Prefecture => "prefecture",
            FieldPath::City => "city",
            FieldPath::Street => "street",
            FieldPath::DependentStartDate => "dependent_start.date",
            FieldPath::DependentStartReason => "dependent_start.reason",
            FieldPath::DependentEndDate => "dependent_end.date",
            FieldPath::DependentEndReason => "dependent_end.reason",
            FieldPath::OverseasExceptionStatus => "overseas_exception.status",
            FieldPath::OverseasStartDate => "overseas_exception.start.date",
            FieldPath::OverseasStartReason => "overseas_exception.start.reason",
            FieldPath::OverseasEndDate => "overseas_exception.end.date",
            FieldPath::OverseasEndReason => "overseas_exception.end.reason",
            FieldPath::SpouseIncome => "income",
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
