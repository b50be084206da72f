use std::sync::Arc;

use crate::config::Config;
use crate::enhance::Enhancer;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable enhancement gateway. `NoopEnhancer` unless an LLM is
    /// configured; swapped at startup, never mid-flight.
    pub enhancer: Arc<dyn Enhancer>,
}
