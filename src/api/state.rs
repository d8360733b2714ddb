//! Application state for the bonus allocation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded default configuration. The engine itself holds no state; every
/// request recomputes from the snapshot it carries (or these defaults).
#[derive(Clone)]
pub struct AppState {
    /// The loaded default configuration.
    defaults: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(defaults: ConfigLoader) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    /// Returns a reference to the default configuration.
    pub fn defaults(&self) -> &ConfigLoader {
        &self.defaults
    }
}
