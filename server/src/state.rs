//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Conversations live entirely in the browser, so the server only holds
//! read-only settings and a reply counter for logging.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub typing_delay: Duration,
    replies_served: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self { typing_delay: config.typing_delay, replies_served: Arc::new(AtomicU64::new(0)) }
    }

    /// Count one reply served through the API, returning the new total.
    pub fn record_reply(&self) -> u64 {
        self.replies_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn replies_served(&self) -> u64 {
        self.replies_served.load(Ordering::Relaxed)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with default settings.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let config = ServerConfig::from_lookup(|_| None).expect("defaults should parse");
        AppState::new(&config)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
