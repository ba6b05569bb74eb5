//! Application state shared across route handlers.

use std::sync::Arc;
use std::time::Instant;

use finsee_advisor::CompletionClient;
use finsee_core::config::FinseeConfig;

/// Shared application state, cheap to clone across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<FinseeConfig>,
    /// Advisor completion client. `None` when no API key was configured;
    /// the chat endpoint then answers 500 without attempting a call.
    pub advisor: Option<Arc<dyn CompletionClient>>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: FinseeConfig, advisor: Option<Arc<dyn CompletionClient>>) -> Self {
        Self {
            config: Arc::new(config),
            advisor,
            start_time: Instant::now(),
        }
    }
}
