//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! organization profile and attachment policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttachmentPolicy, OrganizationProfile};

/// Loads and provides access to organization configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/organization/
/// ├── organization.yaml  # Organization profile and insurance settings
/// └── attachments.yaml   # Attachment format allow-list and size ceilings
/// ```
///
/// # Example
///
/// ```no_run
/// use filing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/organization").unwrap();
/// println!("Organization: {}", loader.organization().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    organization: OrganizationProfile,
    attachment_policy: AttachmentPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a required file is
    /// missing and [`EngineError::ConfigParseError`] when a file contains
    /// invalid YAML or is missing required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationProfile>(&path.join("organization.yaml"))?;
        let attachment_policy = Self::load_yaml::<AttachmentPolicy>(&path.join("attachments.yaml"))?;

        Ok(Self {
            organization,
            attachment_policy,
        })
    }

    /// Returns the organization profile.
    pub fn organization(&self) -> &OrganizationProfile {
        &self.organization
    }

    /// Returns the attachment policy.
    pub fn attachment_policy(&self) -> &AttachmentPolicy {
        &self.attachment_policy
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
