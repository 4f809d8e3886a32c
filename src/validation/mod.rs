//! Dynamic conditional validation for dependent-like records.
//!
//! The change-type selector on a dependent record decides which of its
//! fields are required. That policy is a pure function
//! ([`required_fields`]) consulted by a single generic validator
//! ([`missing_fields`]); no imperative per-field clear/set sequences exist.
//! Each sub-record (the spouse, each other dependent) runs its own
//! independent instance; recomputation is idempotent and never clears
//! previously-set values.

mod field_path;
mod required_fields;
mod validator;

pub use field_path::FieldPath;
pub use required_fields::{required_fields, spouse_required_fields, RecordKind};
pub use validator::{ensure_valid, missing_dependent_fields, missing_fields, missing_spouse_fields};
