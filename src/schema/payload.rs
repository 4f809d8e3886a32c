//! The type-specific filing payloads and their closed union.

use serde::{Deserialize, Serialize};

use crate::calculation::{recalculate_period_group, recompute_bonus_amount};
use crate::calendar::EraDate;
use crate::config::OrganizationProfile;
use crate::models::{
    Address, BonusPaymentPerson, DependentRecord, FilingType, PersonIdentity, PersonName,
    RewardPeriodGroup, SpouseRecord,
};
use crate::validation::{missing_dependent_fields, missing_spouse_fields};

/// Office identification seeded from the organization profile onto every
/// external payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeDefaults {
    /// The health-insurance office symbol.
    pub office_symbol: String,
    /// The pension-insurance office number.
    pub office_number: String,
    /// The organization's registered name.
    pub name: String,
    /// The organization's registered address.
    #[serde(default)]
    pub address: Address,
}

impl OfficeDefaults {
    /// Snapshots the office defaults from an organization profile.
    pub fn from_profile(profile: &OrganizationProfile) -> Self {
        OfficeDefaults {
            office_symbol: profile
                .insurance_settings
                .health_insurance
                .office_symbol
                .clone(),
            office_number: profile
                .insurance_settings
                .pension_insurance
                .office_number
                .clone(),
            name: profile.name.clone(),
            address: profile.address.clone(),
        }
    }
}

/// Payload of an internal hire report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HireReportData {
    /// The joining employee.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The joining date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_on: Option<EraDate>,
}

/// Payload of an internal retirement report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetirementReportData {
    /// The leaving employee.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The retirement date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retired_on: Option<EraDate>,
    /// The retirement reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Payload of an internal dependent change report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependentChangeReportData {
    /// The insured person.
    #[serde(default)]
    pub insured: PersonIdentity,
    /// The spouse sub-record.
    #[serde(default)]
    pub spouse: SpouseRecord,
    /// The other-dependent sub-records.
    #[serde(default)]
    pub other_dependents: Vec<DependentRecord>,
}

/// Payload of an internal address change report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressChangeReportData {
    /// The employee changing address.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The new address.
    #[serde(default)]
    pub new_address: Address,
    /// The moving date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved_on: Option<EraDate>,
}

/// Payload of an internal name change report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameChangeReportData {
    /// The employee changing name.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The new name.
    #[serde(default)]
    pub new_name: PersonName,
    /// The change date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_on: Option<EraDate>,
}

/// Payload of an external qualification acquisition filing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceEnrolmentData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The person acquiring qualification.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The qualification date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification_date: Option<EraDate>,
    /// Expected monthly remuneration (currency and in-kind).
    #[serde(default)]
    pub monthly_remuneration: crate::models::PaymentAmount,
}

/// Payload of an external qualification loss filing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceWithdrawalData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The person losing qualification.
    #[serde(default)]
    pub person: PersonIdentity,
    /// The loss date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_date: Option<EraDate>,
    /// The loss reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_reason: Option<String>,
}

/// Payload of an external dependent change notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependentChangeNotificationData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The insured person.
    #[serde(default)]
    pub insured: PersonIdentity,
    /// The spouse sub-record.
    #[serde(default)]
    pub spouse: SpouseRecord,
    /// The other-dependent sub-records.
    #[serde(default)]
    pub other_dependents: Vec<DependentRecord>,
}

/// One person's row on an assessment or revision filing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardPerson {
    /// The person's identity.
    #[serde(default)]
    pub identity: PersonIdentity,
    /// The person's three-month salary window and derived aggregates.
    #[serde(default)]
    pub periods: RewardPeriodGroup,
}

/// Payload of the annual standard-reward assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardRewardAssessmentData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The assessed persons.
    #[serde(default)]
    pub persons: Vec<RewardPerson>,
}

/// Payload of an off-cycle standard-reward revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardRewardRevisionData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The revised persons.
    #[serde(default)]
    pub persons: Vec<RewardPerson>,
    /// The month the revision takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_month: Option<u32>,
}

/// Payload of a bonus payment report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusPaymentReportData {
    /// Office identification, seeded from the organization profile.
    #[serde(default)]
    pub office: OfficeDefaults,
    /// The bonus payment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<EraDate>,
    /// One row per paid person.
    #[serde(default)]
    pub persons: Vec<BonusPaymentPerson>,
}

/// The closed union of filing payloads, keyed by filing type.
///
/// Exactly one variant is active per filing; "is type X active" is a tag
/// comparison. The union serializes adjacently tagged so persistence
/// round-trips structurally with no implicit key renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FilingData {
    /// Internal hire report.
    HireReport(HireReportData),
    /// Internal retirement report.
    RetirementReport(RetirementReportData),
    /// Internal dependent change report.
    DependentChangeReport(DependentChangeReportData),
    /// Internal address change report.
    AddressChangeReport(AddressChangeReportData),
    /// Internal name change report.
    NameChangeReport(NameChangeReportData),
    /// External qualification acquisition.
    InsuranceEnrolment(InsuranceEnrolmentData),
    /// External qualification loss.
    InsuranceWithdrawal(InsuranceWithdrawalData),
    /// External dependent change notification.
    DependentChangeNotification(DependentChangeNotificationData),
    /// External standard-reward assessment.
    StandardRewardAssessment(StandardRewardAssessmentData),
    /// External standard-reward revision.
    StandardRewardRevision(StandardRewardRevisionData),
    /// External bonus payment report.
    BonusPaymentReport(BonusPaymentReportData),
}

impl FilingData {
    /// The filing type this payload belongs to.
    pub fn filing_type(&self) -> FilingType {
        match self {
            FilingData::HireReport(_) => FilingType::HireReport,
            FilingData::RetirementReport(_) => FilingType::RetirementReport,
            FilingData::DependentChangeReport(_) => FilingType::DependentChangeReport,
            FilingData::AddressChangeReport(_) => FilingType::AddressChangeReport,
            FilingData::NameChangeReport(_) => FilingType::NameChangeReport,
            FilingData::InsuranceEnrolment(_) => FilingType::InsuranceEnrolment,
            FilingData::InsuranceWithdrawal(_) => FilingType::InsuranceWithdrawal,
            FilingData::DependentChangeNotification(_) => FilingType::DependentChangeNotification,
            FilingData::StandardRewardAssessment(_) => FilingType::StandardRewardAssessment,
            FilingData::StandardRewardRevision(_) => FilingType::StandardRewardRevision,
            FilingData::BonusPaymentReport(_) => FilingType::BonusPaymentReport,
        }
    }

    /// Recomputes every derived field in the payload: salary-month totals,
    /// reward aggregates, and bonus amounts. Idempotent; a no-op for
    /// payloads without derived fields.
    pub fn recalculate(&mut self) {
        match self {
            FilingData::StandardRewardAssessment(data) => {
                for person in data.persons.iter_mut() {
                    recalculate_period_group(&mut person.periods);
                }
            }
            FilingData::StandardRewardRevision(data) => {
                for person in data.persons.iter_mut() {
                    recalculate_period_group(&mut person.periods);
                }
            }
            FilingData::BonusPaymentReport(data) => {
                for person in data.persons.iter_mut() {
                    recompute_bonus_amount(person);
                }
            }
            _ => {}
        }
    }

    /// Returns the missing required fields of the payload, as dotted path
    /// strings prefixed with the sub-record they belong to.
    ///
    /// Dependent-carrying payloads run the conditional-validation state
    /// machine per sub-record; person-based payloads require the person's
    /// name. Derived-value payload rows carry no hard requirements (their
    /// derivations degrade to absent instead of failing).
    pub fn missing_fields(&self) -> Vec<String> {
        match self {
            FilingData::HireReport(data) => person_name_missing("person", &data.person),
            FilingData::RetirementReport(data) => person_name_missing("person", &data.person),
            FilingData::AddressChangeReport(data) => person_name_missing("person", &data.person),
            FilingData::NameChangeReport(data) => person_name_missing("person", &data.person),
            FilingData::InsuranceEnrolment(data) => person_name_missing("person", &data.person),
            FilingData::InsuranceWithdrawal(data) => person_name_missing("person", &data.person),
            FilingData::DependentChangeReport(data) => {
                dependent_payload_missing(&data.spouse, &data.other_dependents)
            }
            FilingData::DependentChangeNotification(data) => {
                dependent_payload_missing(&data.spouse, &data.other_dependents)
            }
            FilingData::StandardRewardAssessment(_)
            | FilingData::StandardRewardRevision(_)
            | FilingData::BonusPaymentReport(_) => Vec::new(),
        }
    }

    /// Returns the populated fields whose values are malformed: era-tagged
    /// dates that denote no real calendar date (including any Meiji date,
    /// which has no conversion offset) and identification numbers with the
    /// wrong digit count.
    ///
    /// Only populated fields are checked; absence is the business of
    /// [`Self::missing_fields`]. Submit treats both lists as validation
    /// failures.
    pub fn malformed_fields(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        match self {
            FilingData::HireReport(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(&mut invalid, "joined_on", data.joined_on.as_ref());
            }
            FilingData::RetirementReport(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(&mut invalid, "retired_on", data.retired_on.as_ref());
            }
            FilingData::AddressChangeReport(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(&mut invalid, "moved_on", data.moved_on.as_ref());
            }
            FilingData::NameChangeReport(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(&mut invalid, "changed_on", data.changed_on.as_ref());
            }
            FilingData::InsuranceEnrolment(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(
                    &mut invalid,
                    "qualification_date",
                    data.qualification_date.as_ref(),
                );
            }
            FilingData::InsuranceWithdrawal(data) => {
                identity_malformed(&mut invalid, "person", &data.person);
                check_era_date(&mut invalid, "loss_date", data.loss_date.as_ref());
            }
            FilingData::DependentChangeReport(data) => {
                identity_malformed(&mut invalid, "insured", &data.insured);
                dependent_record_malformed(&mut invalid, "spouse", &data.spouse.record);
                for (index, dependent) in data.other_dependents.iter().enumerate() {
                    dependent_record_malformed(
                        &mut invalid,
                        &format!("other_dependents[{index}]"),
                        dependent,
                    );
                }
            }
            FilingData::DependentChangeNotification(data) => {
                identity_malformed(&mut invalid, "insured", &data.insured);
                dependent_record_malformed(&mut invalid, "spouse", &data.spouse.record);
                for (index, dependent) in data.other_dependents.iter().enumerate() {
                    dependent_record_malformed(
                        &mut invalid,
                        &format!("other_dependents[{index}]"),
                        dependent,
                    );
                }
            }
            FilingData::StandardRewardAssessment(data) => {
                for (index, person) in data.persons.iter().enumerate() {
                    identity_malformed(
                        &mut invalid,
                        &format!("persons[{index}]"),
                        &person.identity,
                    );
                }
            }
            FilingData::StandardRewardRevision(data) => {
                for (index, person) in data.persons.iter().enumerate() {
                    identity_malformed(
                        &mut invalid,
                        &format!("persons[{index}]"),
                        &person.identity,
                    );
                }
            }
            FilingData::BonusPaymentReport(data) => {
                check_era_date(&mut invalid, "payment_date", data.payment_date.as_ref());
                for (index, person) in data.persons.iter().enumerate() {
                    identity_malformed(
                        &mut invalid,
                        &format!("persons[{index}]"),
                        &person.identity,
                    );
                }
            }
        }
        invalid
    }
}

fn person_name_missing(prefix: &str, person: &PersonIdentity) -> Vec<String> {
    let mut missing = Vec::new();
    if person.name.last.is_none() {
        missing.push(format!("{prefix}.last_name"));
    }
    if person.name.first.is_none() {
        missing.push(format!("{prefix}.first_name"));
    }
    missing
}

fn dependent_payload_missing(
    spouse: &SpouseRecord,
    other_dependents: &[DependentRecord],
) -> Vec<String> {
    let mut missing: Vec<String> = missing_spouse_fields(spouse)
        .into_iter()
        .map(|path| format!("spouse.{path}"))
        .collect();

    for (index, dependent) in other_dependents.iter().enumerate() {
        missing.extend(
            missing_dependent_fields(dependent)
                .into_iter()
                .map(|path| format!("other_dependents[{index}].{path}")),
        );
    }

    missing
}

fn check_era_date(invalid: &mut Vec<String>, path: impl Into<String>, date: Option<&EraDate>) {
    if let Some(date) = date {
        if date.to_gregorian().is_err() {
            invalid.push(path.into());
        }
    }
}

fn identity_malformed(invalid: &mut Vec<String>, prefix: &str, identity: &PersonIdentity) {
    check_era_date(
        invalid,
        format!("{prefix}.birth_date"),
        identity.birth_date.as_ref(),
    );
    if let Some(identification) = &identity.identification {
        if !identification.is_well_formed() {
            invalid.push(format!("{prefix}.identification"));
        }
    }
}

fn dependent_record_malformed(invalid: &mut Vec<String>, prefix: &str, record: &DependentRecord) {
    identity_malformed(invalid, prefix, &record.identity);
    check_era_date(
        invalid,
        format!("{prefix}.dependent_start.date"),
        record.dependent_start.date.as_ref(),
    );
    check_era_date(
        invalid,
        format!("{prefix}.dependent_end.date"),
        record.dependent_end.date.as_ref(),
    );
    check_era_date(
        invalid,
        format!("{prefix}.dependent_end.death_date"),
        record.dependent_end.death_date.as_ref(),
    );
    check_era_date(
        invalid,
        format!("{prefix}.overseas_exception.start.date"),
        record.overseas_exception.start.date.as_ref(),
    );
    check_era_date(
        invalid,
        format!("{prefix}.overseas_exception.end.date"),
        record.overseas_exception.end.date.as_ref(),
    );
    identity_malformed(
        invalid,
        &format!("{prefix}.change_after"),
        &record.change_after.identity,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChangeType, PaymentAmount};
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    /// FD-001: the union tag matches the filing type code
    #[test]
    fn test_union_tag_matches_filing_type() {
        let data = FilingData::BonusPaymentReport(BonusPaymentReportData::default());
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"type\":\"bonus_payment_report\""));
        assert_eq!(data.filing_type(), FilingType::BonusPaymentReport);
    }

    /// FD-002: the union round-trips structurally
    #[test]
    fn test_union_round_trip() {
        let mut payload = StandardRewardAssessmentData::default();
        payload.persons.push(RewardPerson::default());
        let data = FilingData::StandardRewardAssessment(payload);
        let json = serde_json::to_string(&data).unwrap();
        let back: FilingData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    /// FD-003: recalculate derives reward aggregates per person
    #[test]
    fn test_recalculate_reward_assessment() {
        let mut person = RewardPerson::default();
        person.periods.salary_months[0].base_days = Some(20);
        person.periods.salary_months[0].currency = Some(dec(300_000));
        person.periods.salary_months[1].base_days = Some(15);
        person.periods.salary_months[1].currency = Some(dec(300_000));
        person.periods.salary_months[2].base_days = Some(30);
        person.periods.salary_months[2].currency = Some(dec(330_000));

        let mut data = FilingData::StandardRewardAssessment(StandardRewardAssessmentData {
            persons: vec![person],
            ..Default::default()
        });
        data.recalculate();

        let FilingData::StandardRewardAssessment(inner) = &data else {
            panic!("tag changed");
        };
        assert_eq!(inner.persons[0].periods.total, dec(630_000));
        assert_eq!(inner.persons[0].periods.average, Some(dec(315_000)));
    }

    /// FD-004: recalculate derives bonus amounts per row
    #[test]
    fn test_recalculate_bonus_report() {
        let mut data = FilingData::BonusPaymentReport(BonusPaymentReportData {
            persons: vec![BonusPaymentPerson {
                payment: PaymentAmount {
                    currency: Some(dec(512_345)),
                    in_kind: None,
                },
                ..Default::default()
            }],
            ..Default::default()
        });
        data.recalculate();

        let FilingData::BonusPaymentReport(inner) = &data else {
            panic!("tag changed");
        };
        assert_eq!(inner.persons[0].bonus_amount, Some(dec(512_000)));
    }

    /// FD-005: recalculate is a no-op on payloads without derived fields
    #[test]
    fn test_recalculate_noop_for_plain_payloads() {
        let mut data = FilingData::HireReport(HireReportData::default());
        let before = data.clone();
        data.recalculate();
        assert_eq!(data, before);
    }

    /// FD-006: dependent payload validation prefixes sub-record paths
    #[test]
    fn test_dependent_payload_missing_paths() {
        let data = FilingData::DependentChangeNotification(DependentChangeNotificationData {
            other_dependents: vec![DependentRecord {
                change_type: Some(ChangeType::Applicable),
                ..Default::default()
            }],
            ..Default::default()
        });

        let missing = data.missing_fields();
        assert!(missing.contains(&"spouse.change_type".to_string()));
        assert!(missing.contains(&"other_dependents[0].birth_date".to_string()));
    }

    /// FD-007: reward payloads carry no hard requirements
    #[test]
    fn test_reward_payloads_have_no_hard_requirements() {
        let data = FilingData::StandardRewardAssessment(StandardRewardAssessmentData::default());
        assert!(data.missing_fields().is_empty());
    }

    /// FD-008: person-based payloads require the person's name
    #[test]
    fn test_person_payload_requires_name() {
        let data = FilingData::HireReport(HireReportData::default());
        let missing = data.missing_fields();
        assert_eq!(missing, vec!["person.last_name", "person.first_name"]);
    }

    /// FD-009: impossible era dates and short identification numbers are
    /// reported as malformed
    #[test]
    fn test_malformed_date_and_identification_reported() {
        use crate::calendar::{Era, EraDate};
        use crate::models::Identification;

        let data = FilingData::InsuranceEnrolment(InsuranceEnrolmentData {
            person: crate::models::PersonIdentity {
                birth_date: Some(EraDate {
                    era: Era::Reiwa,
                    year: 6,
                    month: 2,
                    day: 30,
                }),
                identification: Some(Identification::PersonalNumber("123".to_string())),
                ..Default::default()
            },
            ..Default::default()
        });

        let malformed = data.malformed_fields();
        assert!(malformed.contains(&"person.birth_date".to_string()));
        assert!(malformed.contains(&"person.identification".to_string()));
    }

    /// FD-010: meiji dates are malformed anywhere they appear (no conversion
    /// offset exists)
    #[test]
    fn test_meiji_date_reported_malformed() {
        use crate::calendar::{Era, EraDate};

        let meiji = EraDate {
            era: Era::Meiji,
            year: 40,
            month: 1,
            day: 1,
        };
        let data = FilingData::DependentChangeNotification(DependentChangeNotificationData {
            other_dependents: vec![DependentRecord {
                dependent_start: crate::models::DependentStart {
                    date: Some(meiji),
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        });

        let malformed = data.malformed_fields();
        assert_eq!(malformed, vec!["other_dependents[0].dependent_start.date"]);
    }

    /// FD-011: well-formed populated values produce no malformed entries
    #[test]
    fn test_well_formed_values_pass_malformed_check() {
        use crate::calendar::{Era, EraDate};
        use crate::models::Identification;

        let data = FilingData::InsuranceEnrolment(InsuranceEnrolmentData {
            person: crate::models::PersonIdentity {
                birth_date: Some(EraDate {
                    era: Era::Heisei,
                    year: 2,
                    month: 5,
                    day: 14,
                }),
                identification: Some(Identification::PersonalNumber(
                    "123456789012".to_string(),
                )),
                ..Default::default()
            },
            qualification_date: Some(EraDate {
                era: Era::Reiwa,
                year: 6,
                month: 4,
                day: 1,
            }),
            ..Default::default()
        });

        assert!(data.malformed_fields().is_empty());
    }
}
