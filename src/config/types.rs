//! Configuration types for the organization profile and attachment policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{Address, FilingType};

/// Health-insurance settings of the organization.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInsuranceSettings {
    /// The office symbol printed on health-insurance paperwork.
    pub office_symbol: String,
}

/// Pension-insurance settings of the organization.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionInsuranceSettings {
    /// The office number printed on pension-insurance paperwork.
    pub office_number: String,
}

/// The organization's insurance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceSettings {
    /// Health-insurance settings.
    pub health_insurance: HealthInsuranceSettings,
    /// Pension-insurance settings.
    pub pension_insurance: PensionInsuranceSettings,
}

/// The organization profile: the read-only source of filing defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationProfile {
    /// The organization's registered name.
    pub name: String,
    /// The organization's registered address.
    pub address: Address,
    /// Insurance settings (office symbol and number).
    pub insurance_settings: InsuranceSettings,
}

/// One attachment rule: allowed formats and a size ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachmentRule {
    /// Lowercase file-extension allow-list.
    pub allowed_formats: Vec<String>,
    /// Size ceiling in megabytes.
    pub max_size_mb: u32,
}

/// The attachment policy: organization-level defaults with per-filing-type
/// overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentPolicy {
    /// The organization-level default rule.
    pub defaults: AttachmentRule,
    /// Per-filing-type overrides, keyed by the filing-type code.
    #[serde(default)]
    pub overrides: HashMap<FilingType, AttachmentRule>,
}

impl AttachmentPolicy {
    /// The effective rule for a filing type: the per-type override when one
    /// exists, otherwise the organization default.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filing_engine::config::ConfigLoader;
    /// use filing_engine::models::FilingType;
    ///
    /// let loader = ConfigLoader::load("./config/organization").unwrap();
    /// let rule = loader.attachment_policy().rule_for(FilingType::InsuranceEnrolment);
    /// println!("max {} MB", rule.max_size_mb);
    /// ```
    pub fn rule_for(&self, filing_type: FilingType) -> &AttachmentRule {
        self.overrides.get(&filing_type).unwrap_or(&self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_policy() -> AttachmentPolicy {
        AttachmentPolicy {
            defaults: AttachmentRule {
                allowed_formats: vec!["pdf".to_string(), "png".to_string()],
                max_size_mb: 10,
            },
            overrides: HashMap::from([(
                FilingType::InsuranceEnrolment,
                AttachmentRule {
                    allowed_formats: vec!["pdf".to_string()],
                    max_size_mb: 5,
                },
            )]),
        }
    }

    /// CFG-001: per-type override wins over the default
    #[test]
    fn test_override_wins() {
        let policy = sample_policy();
        let rule = policy.rule_for(FilingType::InsuranceEnrolment);
        assert_eq!(rule.max_size_mb, 5);
        assert_eq!(rule.allowed_formats, vec!["pdf"]);
    }

    /// CFG-002: types without an override fall back to the default
    #[test]
    fn test_fallback_to_default() {
        let policy = sample_policy();
        let rule = policy.rule_for(FilingType::BonusPaymentReport);
        assert_eq!(rule.max_size_mb, 10);
    }

    #[test]
    fn test_policy_deserializes_from_yaml() {
        let yaml = r#"
defaults:
  allowed_formats: [pdf, png, jpg]
  max_size_mb: 10
overrides:
  insurance_enrolment:
    allowed_formats: [pdf]
    max_size_mb: 5
"#;
        let policy: AttachmentPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.defaults.allowed_formats.len(), 3);
        assert_eq!(
            policy.rule_for(FilingType::InsuranceEnrolment).max_size_mb,
            5
        );
    }

    #[test]
    fn test_profile_deserializes_from_yaml() {
        let yaml = r#"
name: "Example Manufacturing Co."
address:
  postal_code: "100-0001"
  prefecture: "Tokyo"
  city: "Chiyoda"
  street: "1-1-1 Chiyoda"
insurance_settings:
  health_insurance:
    office_symbol: "12-ABCD"
  pension_insurance:
    office_number: "12345"
"#;
        let profile: OrganizationProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.name, "Example Manufacturing Co.");
        assert_eq!(
            profile.insurance_settings.health_insurance.office_symbol,
            "12-ABCD"
        );
        assert_eq!(
            profile.insurance_settings.pension_insurance.office_number,
            "12345"
        );
    }
}
