//! Person identity models shared by insured persons and dependents.

use serde::{Deserialize, Serialize};

use crate::calendar::EraDate;

/// A person's name with kana reading variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Family name kana reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_kana: Option<String>,
    /// Given name kana reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_kana: Option<String>,
}

/// A person's gender as recorded on statutory paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Recorded as male.
    Male,
    /// Recorded as female.
    Female,
}

/// Statutory identification: exactly one of the two number kinds.
///
/// The two numbers are mutually exclusive on every form, so the model is a
/// tagged union rather than a pair of nullable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Identification {
    /// The 12-digit personal number.
    PersonalNumber(String),
    /// The 10-digit basic-pension number.
    BasicPensionNumber(String),
}

impl Identification {
    /// Returns true when the digits match the expected length for the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use filing_engine::models::Identification;
    ///
    /// assert!(Identification::PersonalNumber("123456789012".to_string()).is_well_formed());
    /// assert!(!Identification::BasicPensionNumber("123".to_string()).is_well_formed());
    /// ```
    pub fn is_well_formed(&self) -> bool {
        match self {
            Identification::PersonalNumber(digits) => {
                digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit())
            }
            Identification::BasicPensionNumber(digits) => {
                digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// A postal address with optional kana reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Prefecture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    /// City or ward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street-level address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Building name and unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    /// Kana reading of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kana: Option<String>,
}

/// The shared identity shape used by insured persons, spouses, and
/// other dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonIdentity {
    /// The person's name.
    #[serde(default)]
    pub name: PersonName,
    /// The person's birth date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<EraDate>,
    /// The person's recorded gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Relationship to the insured person (e.g., "spouse", "child").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Statutory identification number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// Postal address.
    #[serde(default)]
    pub address: Address,
    /// Linkage to an external employee directory entry. Used only to resolve
    /// defaults; never persisted.
    #[serde(skip)]
    pub directory_ref: Option<String>,
}
