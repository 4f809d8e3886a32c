//! Per-filing-type schema composition.
//!
//! This module defines the closed [`FilingData`] union (one payload shape
//! per filing type) and the [`FilingSchemaRegistry`] that instantiates a
//! typed payload for a filing type, seeding per-type defaults from the
//! organization profile. Dispatch on filing type is a single table lookup;
//! "is type X active" is a tag comparison.

mod payload;
mod registry;

pub use payload::{
    AddressChangeReportData, BonusPaymentReportData, DependentChangeNotificationData,
    DependentChangeReportData, FilingData, HireReportData, InsuranceEnrolmentData,
    InsuranceWithdrawalData, NameChangeReportData, OfficeDefaults, RetirementReportData,
    RewardPerson, StandardRewardAssessmentData, StandardRewardRevisionData,
};
pub use registry::FilingSchemaRegistry;
