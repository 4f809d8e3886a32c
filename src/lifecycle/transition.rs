//! Transition guards and application for the filing lifecycle.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Actor, ActorRole, Filing, FilingCategory, FilingStatus, RejectionSnapshot,
};

/// The statuses reachable from `from`, before role/category guards.
///
/// The acknowledgement sub-states (`pending_received` /
/// `pending_not_received`) carry the same outgoing review transitions as
/// `pending` itself.
pub fn allowed_targets(from: FilingStatus) -> &'static [FilingStatus] {
    match from {
        FilingStatus::Draft => &[FilingStatus::Created, FilingStatus::Withdrawn],
        FilingStatus::Created => &[FilingStatus::Pending, FilingStatus::Withdrawn],
        FilingStatus::Pending => &[
            FilingStatus::PendingReceived,
            FilingStatus::PendingNotReceived,
            FilingStatus::Approved,
            FilingStatus::Rejected,
            FilingStatus::Returned,
            FilingStatus::Withdrawn,
        ],
        FilingStatus::PendingNotReceived => &[
            FilingStatus::PendingReceived,
            FilingStatus::Approved,
            FilingStatus::Rejected,
            FilingStatus::Returned,
            FilingStatus::Withdrawn,
        ],
        FilingStatus::PendingReceived => &[
            FilingStatus::Approved,
            FilingStatus::Rejected,
            FilingStatus::Returned,
            FilingStatus::Withdrawn,
        ],
        FilingStatus::Returned => &[
            FilingStatus::Draft,
            FilingStatus::Created,
            FilingStatus::Withdrawn,
        ],
        FilingStatus::Approved | FilingStatus::Rejected | FilingStatus::Withdrawn => &[],
    }
}

/// Checks whether `actor` may mutate `filing` in its current status.
///
/// Only the owner may mutate a filing while it is `draft` or `returned`.
/// An admin acting in admin mode may mutate only external-category filings;
/// internal filings in draft/created state remain invisible to admin-mode
/// listings and are never mutable by an admin.
///
/// # Errors
///
/// Returns [`EngineError::IllegalTransition`] naming the violated guard.
pub fn ensure_can_mutate(filing: &Filing, actor: &Actor) -> EngineResult<()> {
    if !matches!(filing.status, FilingStatus::Draft | FilingStatus::Returned) {
        return Err(illegal(
            filing.status,
            filing.status,
            format!("a filing in status '{}' cannot be edited", filing.status),
        ));
    }

    match actor.role {
        ActorRole::Employee => {
            if !filing.is_owned_by(actor) {
                return Err(illegal(
                    filing.status,
                    filing.status,
                    "only the filing owner may edit it".to_string(),
                ));
            }
        }
        ActorRole::Admin => {
            if filing.category == FilingCategory::Internal {
                return Err(illegal(
                    filing.status,
                    filing.status,
                    "internal filings are not visible to admin mode".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// Submits a filing: `draft` or `returned` to `created`.
///
/// The payload is recalculated and validated first. Validation covers both
/// absence (required fields left empty) and malformed values (era dates that
/// denote no real calendar date, identification numbers with the wrong digit
/// count); either kind of problem is reported as
/// [`EngineError::ValidationFailed`] and leaves the filing untouched (the
/// transition fails, it does not partially apply).
pub fn submit(filing: &mut Filing, actor: &Actor, now: DateTime<Utc>) -> EngineResult<()> {
    ensure_can_mutate(filing, actor)?;
    ensure_target_allowed(filing.status, FilingStatus::Created)?;

    let mut data = filing.data.clone();
    data.recalculate();
    let mut missing = data.missing_fields();
    missing.extend(data.malformed_fields());
    if !missing.is_empty() {
        return Err(EngineError::ValidationFailed { missing });
    }

    filing.data = data;
    filing.status = FilingStatus::Created;
    filing.updated_at = now;
    Ok(())
}

/// Applies a review transition (`pending`, `approved`, `rejected`,
/// `returned`, or back to `draft` after a return).
///
/// Review transitions require the admin role; the acknowledgement
/// sub-states are reserved for [`acknowledge`]. Entering `rejected` or
/// `returned` snapshots the current attachments so a later edit session can
/// resurface them as its baseline.
pub fn transition(
    filing: &mut Filing,
    to: FilingStatus,
    actor: &Actor,
    now: DateTime<Utc>,
) -> EngineResult<()> {
    ensure_target_allowed(filing.status, to)?;

    match to {
        FilingStatus::Created => {
            return Err(illegal(
                filing.status,
                to,
                "resubmission must go through submit".to_string(),
            ));
        }
        FilingStatus::Withdrawn => {
            return Err(illegal(
                filing.status,
                to,
                "withdrawal must go through withdraw".to_string(),
            ));
        }
        FilingStatus::PendingReceived | FilingStatus::PendingNotReceived => {
            return Err(illegal(
                filing.status,
                to,
                "acknowledgement must go through acknowledge".to_string(),
            ));
        }
        FilingStatus::Draft => {
            // Reopening a returned filing for editing: owner only.
            ensure_can_mutate(filing, actor)?;
        }
        _ => {
            if actor.role != ActorRole::Admin {
                return Err(illegal(
                    filing.status,
                    to,
                    "review transitions require the admin role".to_string(),
                ));
            }
        }
    }

    if matches!(to, FilingStatus::Rejected | FilingStatus::Returned) {
        filing.rejection_snapshots.push(RejectionSnapshot {
            attachments: filing.attachments.clone(),
            comment: None,
            noted_at: now,
        });
    }

    filing.status = to;
    filing.updated_at = now;
    Ok(())
}

/// Marks a pending internal filing as read or unread by the reviewer.
///
/// The acknowledgement sub-states are a read marker on `pending`, not a
/// distinct economic state, and exist only for internal filings.
pub fn acknowledge(
    filing: &mut Filing,
    received: bool,
    actor: &Actor,
    now: DateTime<Utc>,
) -> EngineResult<()> {
    let to = if received {
        FilingStatus::PendingReceived
    } else {
        FilingStatus::PendingNotReceived
    };
    ensure_target_allowed(filing.status, to)?;

    if filing.category != FilingCategory::Internal {
        return Err(illegal(
            filing.status,
            to,
            "acknowledgement sub-states exist only for internal filings".to_string(),
        ));
    }
    if actor.role != ActorRole::Admin {
        return Err(illegal(
            filing.status,
            to,
            "acknowledgement requires the admin role".to_string(),
        ));
    }

    filing.status = to;
    filing.updated_at = now;
    Ok(())
}

/// Withdraws a filing from any non-terminal status (soft destruction).
///
/// The owner may always withdraw; an admin may withdraw external filings
/// only.
pub fn withdraw(filing: &mut Filing, actor: &Actor, now: DateTime<Utc>) -> EngineResult<()> {
    ensure_target_allowed(filing.status, FilingStatus::Withdrawn)?;

    let permitted = match actor.role {
        ActorRole::Employee => filing.is_owned_by(actor),
        ActorRole::Admin => filing.category == FilingCategory::External,
    };
    if !permitted {
        return Err(illegal(
            filing.status,
            FilingStatus::Withdrawn,
            "actor may not withdraw this filing".to_string(),
        ));
    }

    filing.status = FilingStatus::Withdrawn;
    filing.updated_at = now;
    Ok(())
}

fn ensure_target_allowed(from: FilingStatus, to: FilingStatus) -> EngineResult<()> {
    if allowed_targets(from).contains(&to) {
        return Ok(());
    }
    Err(illegal(
        from,
        to,
        format!("no transition from '{from}' to '{to}'"),
    ))
}

fn illegal(from: FilingStatus, to: FilingStatus, reason: String) -> EngineError {
    EngineError::IllegalTransition { from, to, reason }
}
