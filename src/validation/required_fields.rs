//! The required-field policy keyed by change type.

use std::collections::BTreeSet;

use crate::models::{ChangeType, SpouseRecord};

use super::FieldPath;

/// The kind of dependent-like sub-record a policy is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The insured person's spouse.
    Spouse,
    /// One of the "other dependent" entries.
    OtherDependent,
}

/// Computes the required fields of a dependent-like record for the given
/// change type.
///
/// The policy is deterministic and has no coupling to any other record's
/// state:
///
/// - `no_change` clears every requirement; the record is informational only.
/// - `change` also clears every requirement: the authoritative values live
///   in the change-after sub-group, whose fields carry no hard requirement
///   (free-form correction).
/// - `applicable` and `not_applicable` require the name (with kana), birth
///   date, gender, and relationship. Nothing else is required automatically;
///   reason/date sub-groups are populated contextually by the UI layer.
///
/// An unset change type (`None`) carries no requirements beyond the
/// selector itself, which every caller adds via the record-level entry
/// points.
///
/// # Example
///
/// ```
/// use filing_engine::models::ChangeType;
/// use filing_engine::validation::{required_fields, FieldPath, RecordKind};
///
/// let set = required_fields(Some(ChangeType::Applicable), RecordKind::OtherDependent);
/// assert!(set.contains(&FieldPath::BirthDate));
///
/// let cleared = required_fields(Some(ChangeType::NoChange), RecordKind::OtherDependent);
/// assert!(cleared.is_empty());
/// ```
pub fn required_fields(
    change_type: Option<ChangeType>,
    _kind: RecordKind,
) -> BTreeSet<FieldPath> {
    match change_type {
        None | Some(ChangeType::NoChange) | Some(ChangeType::Change) => BTreeSet::new(),
        Some(ChangeType::Applicable) | Some(ChangeType::NotApplicable) => BTreeSet::from([
            FieldPath::LastName,
            FieldPath::FirstName,
            FieldPath::LastNameKana,
            FieldPath::FirstNameKana,
            FieldPath::BirthDate,
            FieldPath::Gender,
            FieldPath::Relationship,
        ]),
    }
}

/// Computes the required fields of a spouse record, honoring the
/// dependent-exempt flag.
///
/// The exemption and the change-type regime are mutually exclusive, not
/// additive: when `exempt_spouse` is set the income figure is required and
/// the change-type requirement is removed entirely; when unset the selector
/// is required and its policy applies. Both regimes set programmatically at
/// once is undefined behavior; the exemption branch wins here, which is the
/// single deterministic reading.
pub fn spouse_required_fields(spouse: &SpouseRecord) -> BTreeSet<FieldPath> {
    if spouse.exempt_spouse {
        return BTreeSet::from([FieldPath::SpouseIncome]);
    }

    let mut fields = required_fields(spouse.record.change_type, RecordKind::Spouse);
    fields.insert(FieldPath::ChangeType);
    fields
}
