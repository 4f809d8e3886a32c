//! Contracts for external collaborators of the filing core.
//!
//! Implementations are owned elsewhere (persistence, directory services,
//! the statutory deadline calculator, file storage); the core only
//! supplies and consumes typed values across these seams. All calls are
//! awaited, non-overlapping per filing instance by the calling layer; the
//! core itself never assumes concurrent mutation of a single filing.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::EraDate;
use crate::config::OrganizationProfile;
use crate::error::EngineResult;
use crate::models::{Filing, FilingType, PersonIdentity};

/// Read-only source of organization profiles (filing defaults).
pub trait OrganizationProvider {
    /// Fetches the profile of one organization.
    fn organization(&self, organization_id: &str) -> EngineResult<OrganizationProfile>;
}

/// One entry of the read-only employee directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEmployee {
    /// The directory's employee identifier.
    pub employee_id: String,
    /// The employee's identity (with identification numbers and address).
    pub identity: PersonIdentity,
    /// The health-insurance insured-person number, when assigned.
    pub insurance_number: Option<String>,
}

/// Read-only directory of an organization's employees, used to pre-fill
/// filings and to reverse-lookup persons.
pub trait EmployeeDirectory {
    /// Lists the employees of one organization.
    fn employees_by_organization(&self, organization_id: &str)
        -> EngineResult<Vec<DirectoryEmployee>>;
}

/// How the statutory deadline applies to a filing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineScope {
    /// One deadline per person on the filing.
    PerPerson,
    /// One deadline for the whole filing.
    PerFiling,
    /// No statutory deadline (internal paperwork).
    None,
}

/// The deadline scope of a filing type.
///
/// External-category filings carry statutory deadlines; multi-person types
/// compute them per person, except the dependent change notification whose
/// deadline is single and filing-level. Internal types have none.
pub fn deadline_scope(filing_type: FilingType) -> DeadlineScope {
    use crate::models::FilingCategory;

    if filing_type.category() == FilingCategory::Internal {
        return DeadlineScope::None;
    }
    match filing_type {
        FilingType::DependentChangeNotification => DeadlineScope::PerFiling,
        _ => DeadlineScope::PerPerson,
    }
}

/// External statutory-deadline calculator.
pub trait DeadlinePolicy {
    /// Computes the legal deadline for a filing, or `None` when the type
    /// carries no deadline.
    fn calculate_legal_deadline(
        &self,
        filing: &Filing,
        filing_type: FilingType,
    ) -> Option<NaiveDate>;
}

/// Opaque filing persistence. The core only requires that `data`
/// round-trips structurally and that absent fields are omitted rather than
/// stored as null.
pub trait FilingStore {
    /// Persists a filing.
    fn save_filing(&mut self, filing: &Filing) -> EngineResult<()>;
    /// Loads a filing by id.
    fn load_filing(&self, id: Uuid) -> EngineResult<Filing>;
}

/// External file attachment storage.
pub trait AttachmentStore {
    /// Uploads a file and returns the reference URL used to build an
    /// attachment record.
    fn upload(
        &mut self,
        file_name: &str,
        contents: &[u8],
        organization_id: &str,
        filing_id: Uuid,
    ) -> EngineResult<String>;
}

/// Reverse-looks-up a person within a filing back to a directory entry:
/// by insurance number first, then by (name, birth date) as a fallback.
///
/// # Example
///
/// ```
/// use filing_engine::external::{resolve_directory_entry, DirectoryEmployee};
/// use filing_engine::models::PersonIdentity;
///
/// let employees = vec![DirectoryEmployee {
///     employee_id: "emp_001".to_string(),
///     identity: PersonIdentity::default(),
///     insurance_number: Some("4471".to_string()),
/// }];
///
/// let hit = resolve_directory_entry(&employees, Some("4471"), None, None);
/// assert_eq!(hit.unwrap().employee_id, "emp_001");
/// ```
pub fn resolve_directory_entry<'a>(
    employees: &'a [DirectoryEmployee],
    insurance_number: Option<&str>,
    name: Option<(&str, &str)>,
    birth_date: Option<EraDate>,
) -> Option<&'a DirectoryEmployee> {
    if let Some(number) = insurance_number {
        if let Some(hit) = employees
            .iter()
            .find(|e| e.insurance_number.as_deref() == Some(number))
        {
            return Some(hit);
        }
    }

    let (last, first) = name?;
    let birth = birth_date?;
    employees.iter().find(|e| {
        e.identity.name.last.as_deref() == Some(last)
            && e.identity.name.first.as_deref() == Some(first)
            && e.identity.birth_date == Some(birth)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Era;
    use crate::models::PersonName;

    fn employee(id: &str, last: &str, first: &str, number: Option<&str>) -> DirectoryEmployee {
        DirectoryEmployee {
            employee_id: id.to_string(),
            identity: PersonIdentity {
                name: PersonName {
                    last: Some(last.to_string()),
                    first: Some(first.to_string()),
                    last_kana: None,
                    first_kana: None,
                },
                birth_date: Some(EraDate {
                    era: Era::Heisei,
                    year: 5,
                    month: 1,
                    day: 23,
                }),
                ..Default::default()
            },
            insurance_number: number.map(str::to_string),
        }
    }

    /// EX-001: insurance number takes precedence
    #[test]
    fn test_lookup_by_insurance_number_first() {
        let employees = vec![
            employee("emp_001", "Sato", "Ken", Some("1001")),
            employee("emp_002", "Sato", "Ken", Some("1002")),
        ];

        let hit = resolve_directory_entry(&employees, Some("1002"), Some(("Sato", "Ken")), None);
        assert_eq!(hit.unwrap().employee_id, "emp_002");
    }

    /// EX-002: fallback matches on name and birth date together
    #[test]
    fn test_lookup_fallback_name_and_birth() {
        let employees = vec![employee("emp_001", "Sato", "Ken", None)];
        let birth = EraDate {
            era: Era::Heisei,
            year: 5,
            month: 1,
            day: 23,
        };

        let hit =
            resolve_directory_entry(&employees, None, Some(("Sato", "Ken")), Some(birth));
        assert_eq!(hit.unwrap().employee_id, "emp_001");

        let wrong_birth = EraDate {
            era: Era::Heisei,
            year: 6,
            month: 1,
            day: 23,
        };
        assert!(
            resolve_directory_entry(&employees, None, Some(("Sato", "Ken")), Some(wrong_birth))
                .is_none()
        );
    }

    /// EX-003: fallback needs both name and birth date
    #[test]
    fn test_lookup_fallback_needs_both_keys() {
        let employees = vec![employee("emp_001", "Sato", "Ken", None)];
        assert!(resolve_directory_entry(&employees, None, Some(("Sato", "Ken")), None).is_none());
        assert!(resolve_directory_entry(&employees, None, None, None).is_none());
    }

    /// EX-004: deadline scope per filing type
    #[test]
    fn test_deadline_scopes() {
        assert_eq!(
            deadline_scope(FilingType::HireReport),
            DeadlineScope::None
        );
        assert_eq!(
            deadline_scope(FilingType::DependentChangeNotification),
            DeadlineScope::PerFiling
        );
        assert_eq!(
            deadline_scope(FilingType::StandardRewardAssessment),
            DeadlineScope::PerPerson
        );
        assert_eq!(
            deadline_scope(FilingType::BonusPaymentReport),
            DeadlineScope::PerPerson
        );
    }
}
