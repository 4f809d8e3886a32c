//! The filing record, its type/category/status enums, and actors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::FilingData;

/// The eleven statutory filing types handled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingType {
    /// Internal: employee reports joining the company.
    HireReport,
    /// Internal: employee reports leaving the company.
    RetirementReport,
    /// Internal: employee reports a dependent change.
    DependentChangeReport,
    /// Internal: employee reports an address change.
    AddressChangeReport,
    /// Internal: employee reports a name change.
    NameChangeReport,
    /// External: health/pension qualification acquisition.
    InsuranceEnrolment,
    /// External: health/pension qualification loss.
    InsuranceWithdrawal,
    /// External: dependent (change) notification to the agency.
    DependentChangeNotification,
    /// External: standard-reward assessment (the annual salary survey).
    StandardRewardAssessment,
    /// External: standard-reward revision (off-cycle salary change).
    StandardRewardRevision,
    /// External: bonus payment report.
    BonusPaymentReport,
}

impl FilingType {
    /// Every filing type, in declaration order.
    pub const ALL: [FilingType; 11] = [
        FilingType::HireReport,
        FilingType::RetirementReport,
        FilingType::DependentChangeReport,
        FilingType::AddressChangeReport,
        FilingType::NameChangeReport,
        FilingType::InsuranceEnrolment,
        FilingType::InsuranceWithdrawal,
        FilingType::DependentChangeNotification,
        FilingType::StandardRewardAssessment,
        FilingType::StandardRewardRevision,
        FilingType::BonusPaymentReport,
    ];

    /// Returns the category this filing type belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use filing_engine::models::{FilingCategory, FilingType};
    ///
    /// assert_eq!(FilingType::HireReport.category(), FilingCategory::Internal);
    /// assert_eq!(FilingType::BonusPaymentReport.category(), FilingCategory::External);
    /// ```
    pub fn category(&self) -> FilingCategory {
        match self {
            FilingType::HireReport
            | FilingType::RetirementReport
            | FilingType::DependentChangeReport
            | FilingType::AddressChangeReport
            | FilingType::NameChangeReport => FilingCategory::Internal,
            FilingType::InsuranceEnrolment
            | FilingType::InsuranceWithdrawal
            | FilingType::DependentChangeNotification
            | FilingType::StandardRewardAssessment
            | FilingType::StandardRewardRevision
            | FilingType::BonusPaymentReport => FilingCategory::External,
        }
    }

    /// The stable snake_case code for this filing type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingType::HireReport => "hire_report",
            FilingType::RetirementReport => "retirement_report",
            FilingType::DependentChangeReport => "dependent_change_report",
            FilingType::AddressChangeReport => "address_change_report",
            FilingType::NameChangeReport => "name_change_report",
            FilingType::InsuranceEnrolment => "insurance_enrolment",
            FilingType::InsuranceWithdrawal => "insurance_withdrawal",
            FilingType::DependentChangeNotification => "dependent_change_notification",
            FilingType::StandardRewardAssessment => "standard_reward_assessment",
            FilingType::StandardRewardRevision => "standard_reward_revision",
            FilingType::BonusPaymentReport => "bonus_payment_report",
        }
    }
}

impl std::fmt::Display for FilingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a filing stays inside the organization or goes to the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingCategory {
    /// Employee-to-HR paperwork; never visible to admin-mode listings
    /// while in draft or created state.
    Internal,
    /// HR-to-agency paperwork.
    External,
}

/// The lifecycle status of a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Being edited by its owner.
    Draft,
    /// Submitted; payload validated.
    Created,
    /// Under review.
    Pending,
    /// Under review and acknowledged by the reviewer. Internal filings only;
    /// a read sub-state of pending, not a distinct economic state.
    PendingReceived,
    /// Under review, not yet acknowledged. Internal filings only.
    PendingNotReceived,
    /// Accepted. Terminal.
    Approved,
    /// Refused. Terminal.
    Rejected,
    /// Sent back to the owner for rework.
    Returned,
    /// Soft-destroyed by its owner. Terminal.
    Withdrawn,
}

impl FilingStatus {
    /// True for `pending` and its acknowledgement sub-states.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            FilingStatus::Pending | FilingStatus::PendingReceived | FilingStatus::PendingNotReceived
        )
    }

    /// True when no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FilingStatus::Approved | FilingStatus::Rejected | FilingStatus::Withdrawn
        )
    }

    /// The stable snake_case code for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Draft => "draft",
            FilingStatus::Created => "created",
            FilingStatus::Pending => "pending",
            FilingStatus::PendingReceived => "pending_received",
            FilingStatus::PendingNotReceived => "pending_not_received",
            FilingStatus::Approved => "approved",
            FilingStatus::Rejected => "rejected",
            FilingStatus::Returned => "returned",
            FilingStatus::Withdrawn => "withdrawn",
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored file reference attached to a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The original file name.
    pub file_name: String,
    /// The storage URL returned by the attachment store.
    pub file_url: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// The attachment state captured when a filing is rejected or returned.
///
/// A returned filing resurfaces its last snapshot's attachments as the
/// editing baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionSnapshot {
    /// The attachments at the moment of rejection/return.
    pub attachments: Vec<Attachment>,
    /// The reviewer's comment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the snapshot was taken.
    pub noted_at: DateTime<Utc>,
}

/// The role an actor holds when touching a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// A regular employee acting on their own filings.
    Employee,
    /// An administrator acting in admin mode.
    Admin,
}

/// The actor requesting a mutation or transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The actor's identifier (matched against the filing owner).
    pub id: String,
    /// The actor's role.
    pub role: ActorRole,
}

impl Actor {
    /// An employee actor with the given id.
    pub fn employee(id: impl Into<String>) -> Self {
        Actor {
            id: id.into(),
            role: ActorRole::Employee,
        }
    }

    /// An admin-mode actor with the given id.
    pub fn admin(id: impl Into<String>) -> Self {
        Actor {
            id: id.into(),
            role: ActorRole::Admin,
        }
    }
}

/// One statutory social-insurance filing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filing {
    /// Unique identifier.
    pub id: Uuid,
    /// The filing type; also keys the `data` union.
    pub filing_type: FilingType,
    /// Internal or external.
    pub category: FilingCategory,
    /// Current lifecycle status.
    pub status: FilingStatus,
    /// The owning employee, when the filing belongs to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The owning organization.
    pub organization_id: String,
    /// The type-specific payload.
    pub data: FilingData,
    /// Uploaded attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Snapshots taken on rejection or return, newest last.
    #[serde(default)]
    pub rejection_snapshots: Vec<RejectionSnapshot>,
    /// The statutory deadline computed by the external deadline policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Filing {
    /// The attachments an editor should start from after a return: the last
    /// rejection snapshot's attachments, falling back to the filing's
    /// current attachments when no snapshot exists.
    pub fn editing_baseline(&self) -> &[Attachment] {
        self.rejection_snapshots
            .last()
            .map(|snapshot| snapshot.attachments.as_slice())
            .unwrap_or(&self.attachments)
    }

    /// True when `actor` owns this filing.
    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        self.employee_id.as_deref() == Some(actor.id.as_str())
    }
}
