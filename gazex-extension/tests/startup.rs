use gazex_engine::{EngineCommand, ScriptedEngine, StartupScript};
use gazex_extension::{ExtensionError, GazeConfig, GazeExtension, LifecyclePhase};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn auto_initialize_starts_the_engine_and_leaves_it_paused() {
    let engine = Arc::new(ScriptedEngine::with_startup(StartupScript::SucceedAfter(
        Duration::from_millis(300),
    )));
    let mut config = GazeConfig::default().with_engine(engine.clone());
    config.auto_initialize = true;

    let started = tokio::time::Instant::now();
    let extension = GazeExtension::initialize(config).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(extension.is_initialized());
    assert_eq!(extension.phase(), LifecyclePhase::Paused);
    assert!(engine.is_paused());

    // begin, then mouse calibration off, then pause
    let commands = engine.commands();
    let begin = commands
        .iter()
        .position(|c| *c == EngineCommand::Begin)
        .unwrap();
    let stop_mouse = commands
        .iter()
        .position(|c| *c == EngineCommand::RemoveMouseEventListeners)
        .unwrap();
    let pause = commands
        .iter()
        .position(|c| *c == EngineCommand::Pause)
        .unwrap();
    assert!(begin < stop_mouse && stop_mouse < pause);
}

#[tokio::test]
async fn startup_failure_fails_the_call_and_stays_retryable() {
    let engine = Arc::new(ScriptedEngine::with_startup(StartupScript::Fail(
        "no camera".into(),
    )));
    let extension = GazeExtension::initialize(GazeConfig::default().with_engine(engine.clone()))
        .await
        .unwrap();

    let err = extension.start().await.unwrap_err();
    assert!(matches!(err, ExtensionError::Startup(_)));
    assert!(!extension.is_initialized());
    assert_eq!(extension.phase(), LifecyclePhase::Uninitialized);

    engine.script_startup(StartupScript::Succeed);
    extension.start().await.unwrap();
    assert!(extension.is_initialized());
    assert_eq!(extension.phase(), LifecyclePhase::Paused);
}

#[tokio::test(start_paused = true)]
async fn stalled_startup_times_out_instead_of_hanging() {
    let engine = Arc::new(ScriptedEngine::with_startup(StartupScript::Hang));
    let mut config = GazeConfig::default().with_engine(engine);
    config.startup_timeout = Duration::from_secs(5);

    let extension = GazeExtension::initialize(config).await.unwrap();
    let err = extension.start().await.unwrap_err();
    assert!(matches!(err, ExtensionError::StartupTimeout(_)));
    assert!(!extension.is_initialized());
}
