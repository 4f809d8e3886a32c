//! Organization configuration for the filing engine.
//!
//! This module provides the [`ConfigLoader`] for reading the organization
//! profile and attachment policy from YAML files, and the strongly-typed
//! structures they deserialize into. The loaded profile is a read-only
//! snapshot: the schema registry reads it once per filing instantiation and
//! never mutates it.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttachmentPolicy, AttachmentRule, HealthInsuranceSettings, InsuranceSettings,
    OrganizationProfile, PensionInsuranceSettings,
};
