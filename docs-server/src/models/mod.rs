use rivet_core::definition::{catalogue, ComponentDefinition};

use crate::config::Config;

/// Shared, read-only state of the docs server.
pub struct AppState {
    pub config: Config,
    pub catalogue: Vec<ComponentDefinition>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalogue: catalogue(),
        }
    }

    pub fn find(&self, key: &str) -> Option<&ComponentDefinition> {
        self.catalogue.iter().find(|definition| definition.key == key)
    }
}
