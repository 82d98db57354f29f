//! Application state for the API server.

use std::sync::Arc;
use voicehelm_resolver::{Resolver, ResolverConfig};

/// Shared application state for the API server.
pub struct AppState {
    /// The resolver that turns transcripts into action payloads
    pub resolver: Arc<Resolver>,

    /// Server start time (for health checks)
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state with the given resolver configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(config)),
            start_time: std::time::Instant::now(),
        }
    }

    /// Create application state around an existing resolver (used by tests
    /// to substitute the agent invoker).
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
