use gazex_engine::EngineError;
use std::time::Duration;
use thiserror::Error;

/// Failures local to a single extension call; none of these crash the host.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error(
        "no gaze engine available: pass one in GazeConfig or install a process default before initializing"
    )]
    EngineUnavailable,

    #[error("engine startup failed")]
    Startup(#[from] EngineError),

    #[error("engine startup timed out after {0:?}")]
    StartupTimeout(Duration),
}
