//! Application state for the filing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::schema::FilingSchemaRegistry;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded organization configuration and the schema registry.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    registry: Arc<FilingSchemaRegistry>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(FilingSchemaRegistry::new()),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the schema registry.
    pub fn registry(&self) -> &FilingSchemaRegistry {
        &self.registry
    }
}
