//! Reward and bonus calculation logic.
//!
//! This module contains the deterministic, statute-mandated derivations for
//! monthly salary totals, the valid-month averaging rules used by
//! standard-reward assessment and revision, and the bonus-amount truncation
//! rule. Every function here is pure over its inputs, re-entrant, and
//! idempotent: running it twice on the same inputs yields the same outputs
//! with no side effects beyond the derived fields. Derivations never fail;
//! they degrade to absent values on insufficient input.

mod bonus_amount;
mod monthly_total;
mod reward_average;

pub use bonus_amount::{bonus_amount, recompute_bonus_amount};
pub use monthly_total::recompute_salary_total;
pub use reward_average::{recalculate_period_group, RewardAggregates, VALID_MONTH_MIN_BASE_DAYS};
