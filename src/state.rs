//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the startup configuration; per-request resolution state lives
//! in the request itself, so handlers share nothing mutable.

use crate::config::AppConfig;

/// Cloneable handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
