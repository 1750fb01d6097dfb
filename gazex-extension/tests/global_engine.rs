// Exercises the process-global engine fallback, kept in its own binary so
// the shared slot cannot race with unrelated tests.

use gazex_engine::{ScriptedEngine, clear_default_engine, install_default_engine};
use gazex_extension::{ExtensionError, GazeConfig, GazeExtension};
use std::sync::Arc;

#[tokio::test]
async fn initialize_falls_back_to_the_installed_default_engine() {
    let engine = Arc::new(ScriptedEngine::new());
    install_default_engine(engine.clone());

    let extension = GazeExtension::initialize(GazeConfig::default())
        .await
        .unwrap();
    assert!(engine.has_listener());
    assert!(!extension.is_initialized());

    clear_default_engine();
    let result = GazeExtension::initialize(GazeConfig::default()).await;
    assert!(matches!(result, Err(ExtensionError::EngineUnavailable)));
}
