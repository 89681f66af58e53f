//! Shared, read-only application state handed to every handler.

use viktor_core::config::{Config, DemoConfig, SearchConfig};
use viktor_core::Catalog;

#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub search: SearchConfig,
    pub demo: DemoConfig,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            search: config.search.clone(),
            demo: config.demo.clone(),
        }
    }

    /// Default search settings and no artificial delays.
    pub fn instant(catalog: Catalog) -> Self {
        Self {
            catalog,
            search: SearchConfig::default(),
            demo: DemoConfig::instant(),
        }
    }
}
