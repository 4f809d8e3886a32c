//! The filing lifecycle state machine.
//!
//! Status transitions are gated by the acting role, the filing category,
//! and (on submit) the payload's own validity. Guards are synchronous and
//! pure: an invalid transition is rejected with a typed reason and no
//! partial mutation is applied.

mod transition;

pub use transition::{acknowledge, allowed_targets, ensure_can_mutate, submit, transition, withdraw};
