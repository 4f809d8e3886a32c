//! The filing-type to schema-builder lookup table.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::OrganizationProfile;
use crate::error::{EngineError, EngineResult};
use crate::models::{Filing, FilingStatus, FilingType};

use super::payload::{
    AddressChangeReportData, BonusPaymentReportData, DependentChangeNotificationData,
    DependentChangeReportData, FilingData, HireReportData, InsuranceEnrolmentData,
    InsuranceWithdrawalData, NameChangeReportData, OfficeDefaults, RetirementReportData,
    StandardRewardAssessmentData, StandardRewardRevisionData,
};

type SchemaBuilder = fn(&OrganizationProfile) -> FilingData;

/// Instantiates typed filing payloads, one builder per filing type.
///
/// Builders are registered in a lookup table at construction; dispatch is a
/// single table lookup instead of conditionals over type codes. External
/// payload builders snapshot office defaults from the organization profile;
/// the snapshot is read once per instantiation and never mutated afterward.
///
/// # Example
///
/// ```
/// use filing_engine::config::ConfigLoader;
/// use filing_engine::models::FilingType;
/// use filing_engine::schema::{FilingData, FilingSchemaRegistry};
///
/// # fn main() -> Result<(), filing_engine::error::EngineError> {
/// let loader = ConfigLoader::load("./config/organization")?;
/// let registry = FilingSchemaRegistry::new();
/// let data = registry.instantiate(FilingType::InsuranceEnrolment, loader.organization())?;
/// assert_eq!(data.filing_type(), FilingType::InsuranceEnrolment);
/// # Ok(())
/// # }
/// ```
pub struct FilingSchemaRegistry {
    builders: HashMap<FilingType, SchemaBuilder>,
}

impl FilingSchemaRegistry {
    /// Creates a registry with all eleven builders registered.
    pub fn new() -> Self {
        let mut builders: HashMap<FilingType, SchemaBuilder> = HashMap::new();

        builders.insert(FilingType::HireReport, |_| {
            FilingData::HireReport(HireReportData::default())
        });
        builders.insert(FilingType::RetirementReport, |_| {
            FilingData::RetirementReport(RetirementReportData::default())
        });
        builders.insert(FilingType::DependentChangeReport, |_| {
            FilingData::DependentChangeReport(DependentChangeReportData::default())
        });
        builders.insert(FilingType::AddressChangeReport, |_| {
            FilingData::AddressChangeReport(AddressChangeReportData::default())
        });
        builders.insert(FilingType::NameChangeReport, |_| {
            FilingData::NameChangeReport(NameChangeReportData::default())
        });
        builders.insert(FilingType::InsuranceEnrolment, |org| {
            FilingData::InsuranceEnrolment(InsuranceEnrolmentData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });
        builders.insert(FilingType::InsuranceWithdrawal, |org| {
            FilingData::InsuranceWithdrawal(InsuranceWithdrawalData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });
        builders.insert(FilingType::DependentChangeNotification, |org| {
            FilingData::DependentChangeNotification(DependentChangeNotificationData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });
        builders.insert(FilingType::StandardRewardAssessment, |org| {
            FilingData::StandardRewardAssessment(StandardRewardAssessmentData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });
        builders.insert(FilingType::StandardRewardRevision, |org| {
            FilingData::StandardRewardRevision(StandardRewardRevisionData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });
        builders.insert(FilingType::BonusPaymentReport, |org| {
            FilingData::BonusPaymentReport(BonusPaymentReportData {
                office: OfficeDefaults::from_profile(org),
                ..Default::default()
            })
        });

        Self { builders }
    }

    /// Instantiates the payload for a filing type, seeding defaults from the
    /// organization profile.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] when no builder is registered for
    /// the type (cannot happen with a registry built by [`Self::new`]).
    pub fn instantiate(
        &self,
        filing_type: FilingType,
        organization: &OrganizationProfile,
    ) -> EngineResult<FilingData> {
        let builder = self
            .builders
            .get(&filing_type)
            .ok_or_else(|| EngineError::NotFound {
                entity: "schema builder".to_string(),
                id: filing_type.to_string(),
            })?;
        Ok(builder(organization))
    }

    /// Creates a complete draft filing of the given type.
    pub fn new_filing(
        &self,
        filing_type: FilingType,
        organization_id: impl Into<String>,
        employee_id: Option<String>,
        organization: &OrganizationProfile,
        now: DateTime<Utc>,
    ) -> EngineResult<Filing> {
        let data = self.instantiate(filing_type, organization)?;
        Ok(Filing {
            id: Uuid::new_v4(),
            filing_type,
            category: filing_type.category(),
            status: FilingStatus::Draft,
            employee_id,
            organization_id: organization_id.into(),
            data,
            attachments: Vec::new(),
            rejection_snapshots: Vec::new(),
            deadline: None,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Default for FilingSchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
