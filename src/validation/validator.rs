//! The generic validator: one presence check over a requirement set.

use std::collections::BTreeSet;

use crate::error::{EngineError, EngineResult};
use crate::models::{DependentRecord, SpouseRecord};

use super::required_fields::{required_fields, spouse_required_fields, RecordKind};
use super::FieldPath;

/// Returns the fields of `record` that `required` names but are absent,
/// in stable path order.
///
/// Only requirement state is consulted; stale values in non-required fields
/// are tolerated (they are excluded at serialization time by the caller if
/// desired).
pub fn missing_fields(
    record: &DependentRecord,
    required: &BTreeSet<FieldPath>,
) -> Vec<FieldPath> {
    required
        .iter()
        .copied()
        .filter(|path| !field_is_present(record, *path))
        .collect()
}

/// Computes the requirement set for `record` as an other-dependent and
/// returns its missing fields.
pub fn missing_dependent_fields(record: &DependentRecord) -> Vec<FieldPath> {
    let mut required = required_fields(record.change_type, RecordKind::OtherDependent);
    required.insert(FieldPath::ChangeType);
    missing_fields(record, &required)
}

/// Computes the requirement set for a spouse record (honoring the
/// dependent-exempt flag) and returns its missing fields.
pub fn missing_spouse_fields(spouse: &SpouseRecord) -> Vec<FieldPath> {
    let required = spouse_required_fields(spouse);
    let mut missing = missing_fields(&spouse.record, &required);
    if required.contains(&FieldPath::SpouseIncome) && spouse.income.is_none() {
        missing.push(FieldPath::SpouseIncome);
    }
    missing.sort();
    missing.dedup();
    missing
}

/// Fails with [`EngineError::ValidationFailed`] when any required field
/// is missing.
pub fn ensure_valid(missing: Vec<FieldPath>) -> EngineResult<()> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(EngineError::ValidationFailed {
        missing: missing.iter().map(|path| path.to_string()).collect(),
    })
}

fn field_is_present(record: &DependentRecord, path: FieldPath) -> bool {
    let identity = &record.identity;
    match path {
        FieldPath::ChangeType => record.change_type.is_some(),
        FieldPath::LastName => identity.name.last.is_some(),
        FieldPath::FirstName => identity.name.first.is_some(),
        FieldPath::LastNameKana => identity.name.last_kana.is_some(),
        FieldPath::FirstNameKana => identity.name.first_kana.is_some(),
        FieldPath::BirthDate => identity.birth_date.is_some(),
        FieldPath::Gender => identity.gender.is_some(),
        FieldPath::Relationship => identity.relationship.is_some(),
        FieldPath::Identification => identity.identification.is_some(),
        FieldPath::PostalCode => identity.address.postal_code.is_some(),
        FieldPath::Prefecture => identity.address.prefecture.is_some(),
        FieldPath::City => identity.address.city.is_some(),
        FieldPath::Street => identity.address.street.is_some(),
        FieldPath::DependentStartDate => record.dependent_start.date.is_some(),
        FieldPath::DependentStartReason => record.dependent_start.reason.is_some(),
        FieldPath::DependentEndDate => record.dependent_end.date.is_some(),
        FieldPath::DependentEndReason => record.dependent_end.reason.is_some(),
        FieldPath::OverseasExceptionStatus => record.overseas_exception.status.is_some(),
        FieldPath::OverseasStartDate => record.overseas_exception.start.date.is_some(),
        FieldPath::OverseasStartReason => record.overseas_exception.start.reason.is_some(),
        FieldPath::OverseasEndDate => record.overseas_exception.end.date.is_some(),
        FieldPath::OverseasEndReason => record.overseas_exception.end.reason.is_some(),
        // Income lives on the spouse wrapper, not the dependent record.
        FieldPath::SpouseIncome => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Era, EraDate};
    use crate::models::{ChangeType, Gender, PersonName};
    use rust_decimal::Decimal;

    fn complete_record(change_type: ChangeType) -> DependentRecord {
        DependentRecord {
            identity: crate::models::PersonIdentity {
                name: PersonName {
                    last: Some("Tanaka".to_string()),
                    first: Some("Yuki".to_string()),
                    last_kana: Some("タナカ".to_string()),
                    first_kana: Some("ユキ".to_string()),
                },
                birth_date: Some(EraDate {
                    era: Era::Heisei,
                    year: 10,
                    month: 3,
                    day: 2,
                }),
                gender: Some(Gender::Female),
                relationship: Some("child".to_string()),
                ..Default::default()
            },
            change_type: Some(change_type),
            ..Default::default()
        }
    }

    /// DV-001: an empty record under no_change produces no failures
    #[test]
    fn test_no_change_empty_record_is_valid() {
        let record = DependentRecord {
            change_type: Some(ChangeType::NoChange),
            ..Default::default()
        };
        let missing = missing_dependent_fields(&record);
        assert!(missing.is_empty());
        assert!(ensure_valid(missing).is_ok());
    }

    /// DV-002: switching to applicable without identity fields fails
    #[test]
    fn test_applicable_empty_record_is_invalid() {
        let record = DependentRecord {
            change_type: Some(ChangeType::Applicable),
            ..Default::default()
        };
        let missing = missing_dependent_fields(&record);
        assert!(missing.contains(&FieldPath::LastName));
        assert!(missing.contains(&FieldPath::BirthDate));
        assert!(missing.contains(&FieldPath::Gender));
        assert!(missing.contains(&FieldPath::Relationship));

        let err = ensure_valid(missing).unwrap_err();
        assert!(err.to_string().contains("birth_date"));
    }

    /// DV-003: a complete record under applicable passes
    #[test]
    fn test_applicable_complete_record_is_valid() {
        let record = complete_record(ChangeType::Applicable);
        assert!(missing_dependent_fields(&record).is_empty());
    }

    /// DV-004: clearing a required field after the fact is caught
    #[test]
    fn test_cleared_required_field_is_caught() {
        let mut record = complete_record(ChangeType::NotApplicable);
        record.identity.name.first_kana = None;
        let missing = missing_dependent_fields(&record);
        assert_eq!(missing, vec![FieldPath::FirstNameKana]);
    }

    /// DV-005: the same field cleared under no_change is tolerated
    #[test]
    fn test_cleared_field_tolerated_under_no_change() {
        let mut record = complete_record(ChangeType::NoChange);
        record.identity.name.first_kana = None;
        assert!(missing_dependent_fields(&record).is_empty());
    }

    /// DV-006: an unset selector is itself a missing field
    #[test]
    fn test_unset_change_type_is_missing() {
        let record = DependentRecord::default();
        let missing = missing_dependent_fields(&record);
        assert_eq!(missing, vec![FieldPath::ChangeType]);
    }

    /// DV-007: recomputation twice with no intervening change is identical
    #[test]
    fn test_recomputation_is_idempotent() {
        let record = DependentRecord {
            change_type: Some(ChangeType::Applicable),
            ..Default::default()
        };
        let first = missing_dependent_fields(&record);
        let second = missing_dependent_fields(&record);
        assert_eq!(first, second);
    }

    /// DV-008: exempt spouse without income fails on income only
    #[test]
    fn test_exempt_spouse_missing_income() {
        let spouse = SpouseRecord {
            exempt_spouse: true,
            ..Default::default()
        };
        let missing = missing_spouse_fields(&spouse);
        assert_eq!(missing, vec![FieldPath::SpouseIncome]);
    }

    /// DV-009: exempt spouse with income passes with everything else empty
    #[test]
    fn test_exempt_spouse_with_income_is_valid() {
        let spouse = SpouseRecord {
            exempt_spouse: true,
            income: Some(Decimal::new(1_200_000, 0)),
            ..Default::default()
        };
        assert!(missing_spouse_fields(&spouse).is_empty());
    }

    /// DV-010: non-exempt spouse follows the change-type regime
    #[test]
    fn test_non_exempt_spouse_follows_change_type() {
        let spouse = SpouseRecord {
            record: complete_record(ChangeType::Applicable),
            ..Default::default()
        };
        assert!(missing_spouse_fields(&spouse).is_empty());

        let empty_spouse = SpouseRecord::default();
        let missing = missing_spouse_fields(&empty_spouse);
        assert_eq!(missing, vec![FieldPath::ChangeType]);
    }

    /// DV-011: change regime requires nothing even on an empty record
    #[test]
    fn test_change_regime_requires_only_selector() {
        let record = DependentRecord {
            change_type: Some(ChangeType::Change),
            ..Default::default()
        };
        assert!(missing_dependent_fields(&record).is_empty());
    }
}
