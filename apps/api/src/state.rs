use crate::config::Config;
use crate::screening::pipeline::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the stop-word set built once at startup; cloning shares it.
    pub screener: Screener,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        AppState {
            screener: Screener::new(config.stop_words()),
            config,
        }
    }
}
