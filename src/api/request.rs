//! Request types for the filing engine API.

use serde::{Deserialize, Serialize};

use crate::models::{BonusPaymentPerson, FilingType, RewardPeriodGroup};
use crate::schema::FilingData;

/// Request body for `POST /filings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFilingRequest {
    /// The filing type to instantiate.
    pub filing_type: FilingType,
    /// The owning organization.
    pub organization_id: String,
    /// The owning employee, when the filing belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// Request body for `POST /filings/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// The payload to validate.
    pub data: FilingData,
}

/// Request body for `POST /calculate/reward`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardCalculationRequest {
    /// The period group to recalculate.
    pub periods: RewardPeriodGroup,
}

/// Request body for `POST /calculate/bonus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCalculationRequest {
    /// The bonus rows to recalculate.
    pub persons: Vec<BonusPaymentPerson>,
}
