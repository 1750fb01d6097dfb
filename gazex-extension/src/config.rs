use gazex_core::TargetResolver;
use gazex_engine::GazeEngine;
use gazex_timing::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Configuration accepted by [`crate::GazeExtension::initialize`].
#[derive(Clone)]
pub struct GazeConfig {
    /// Round sample x/y to the nearest integer. Default true.
    pub round_predictions: bool,
    /// Run engine startup during `initialize` and leave the engine paused.
    /// Default false.
    pub auto_initialize: bool,
    /// Upper bound on engine startup; a stalled engine fails the call
    /// instead of leaving it pending forever.
    pub startup_timeout: Duration,
    /// Engine handle. When absent the process-global default engine is used.
    pub engine: Option<Arc<dyn GazeEngine>>,
    /// Resolver for trial target selectors. Defaults to one that resolves
    /// nothing.
    pub resolver: Option<Arc<dyn TargetResolver>>,
    /// Session clock. Defaults to a monotonic clock started at initialize.
    pub clock: Option<Arc<dyn Clock>>,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            round_predictions: true,
            auto_initialize: false,
            startup_timeout: Duration::from_secs(30),
            engine: None,
            resolver: None,
            clock: None,
        }
    }
}

impl GazeConfig {
    pub fn with_engine(mut self, engine: Arc<dyn GazeEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn TargetResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }
}
