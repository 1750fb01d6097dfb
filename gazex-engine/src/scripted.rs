//! In-memory engine used by tests and by hosts running without a tracker.
//!
//! Commands are recorded in order, startup behavior is scripted, and gaze
//! estimates are emitted on demand through the registered listener.

use crate::engine::{EngineError, GazeEngine, GazeListener, RawGaze};
use async_trait::async_trait;
use gazex_core::RegressionModel;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// What `begin` should do on the next call.
#[derive(Debug, Clone)]
pub enum StartupScript {
    Succeed,
    SucceedAfter(Duration),
    Fail(String),
    /// Never resolves. Exercises the startup timeout.
    Hang,
}

/// Every command the adapter can issue, in the order it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Begin,
    Pause,
    Resume,
    ClearData,
    ShowVideo(bool),
    ShowFaceOverlay(bool),
    ShowFaceFeedbackBox(bool),
    ShowPredictionPoints(bool),
    RecordScreenPosition { x: f64, y: f64, kind: String },
    SetRegression(RegressionModel),
    AddMouseEventListeners,
    RemoveMouseEventListeners,
}

#[derive(Default)]
pub struct ScriptedEngine {
    listener: Mutex<Option<GazeListener>>,
    commands: Mutex<Vec<EngineCommand>>,
    startup: Mutex<Option<StartupScript>>,
    paused: AtomicBool,
    prediction_ready: AtomicBool,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_startup(startup: StartupScript) -> Self {
        let engine = Self::new();
        engine.script_startup(startup);
        engine
    }

    /// Sets the behavior of the next `begin` call. Unscripted startups
    /// succeed immediately.
    pub fn script_startup(&self, startup: StartupScript) {
        *self.startup.lock() = Some(startup);
    }

    /// Feeds one estimate (or a "no detection") to the registered listener,
    /// as the real engine's prediction loop would.
    pub fn emit(&self, raw: Option<RawGaze>, elapsed_ms: f64) {
        if let Some(listener) = self.listener.lock().as_mut() {
            listener(raw, elapsed_ms);
        }
    }

    pub fn set_prediction_ready(&self, ready: bool) {
        self.prediction_ready.store(ready, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }

    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.lock().clone()
    }

    pub fn last_regression(&self) -> Option<RegressionModel> {
        self.commands
            .lock()
            .iter()
            .rev()
            .find_map(|command| match command {
                EngineCommand::SetRegression(model) => Some(*model),
                _ => None,
            })
    }

    fn record(&self, command: EngineCommand) {
        self.commands.lock().push(command);
    }
}

#[async_trait]
impl GazeEngine for ScriptedEngine {
    fn set_gaze_listener(&self, listener: GazeListener) {
        *self.listener.lock() = Some(listener);
    }

    async fn begin(&self) -> Result<(), EngineError> {
        self.record(EngineCommand::Begin);
        let script = self.startup.lock().clone();
        match script {
            None | Some(StartupScript::Succeed) => Ok(()),
            Some(StartupScript::SucceedAfter(delay)) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            Some(StartupScript::Fail(reason)) => Err(EngineError::Startup(reason)),
            Some(StartupScript::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }

    fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
        self.record(EngineCommand::Pause);
    }

    fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.record(EngineCommand::Resume);
    }

    fn clear_data(&self) {
        self.record(EngineCommand::ClearData);
    }

    fn show_video(&self, show: bool) {
        self.record(EngineCommand::ShowVideo(show));
    }

    fn show_face_overlay(&self, show: bool) {
        self.record(EngineCommand::ShowFaceOverlay(show));
    }

    fn show_face_feedback_box(&self, show: bool) {
        self.record(EngineCommand::ShowFaceFeedbackBox(show));
    }

    fn show_prediction_points(&self, show: bool) {
        self.record(EngineCommand::ShowPredictionPoints(show));
    }

    fn record_screen_position(&self, x: f64, y: f64, kind: &str) {
        self.record(EngineCommand::RecordScreenPosition {
            x,
            y,
            kind: kind.to_string(),
        });
    }

    fn set_regression(&self, model: RegressionModel) {
        self.record(EngineCommand::SetRegression(model));
    }

    fn add_mouse_event_listeners(&self) {
        self.record(EngineCommand::AddMouseEventListeners);
    }

    fn remove_mouse_event_listeners(&self) {
        self.record(EngineCommand::RemoveMouseEventListeners);
    }

    fn prediction_ready(&self) -> bool {
        self.prediction_ready.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn records_commands_in_order() {
        let engine = ScriptedEngine::new();
        engine.show_video(false);
        engine.pause();
        engine.resume();
        assert_eq!(
            engine.commands(),
            vec![
                EngineCommand::ShowVideo(false),
                EngineCommand::Pause,
                EngineCommand::Resume,
            ]
        );
        assert!(!engine.is_paused());
    }

    #[test]
    fn emit_reaches_registered_listener() {
        let engine = ScriptedEngine::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_by_listener = seen.clone();
        engine.set_gaze_listener(Box::new(move |raw, _| {
            if raw.is_some() {
                seen_by_listener.fetch_add(1, Ordering::SeqCst);
            }
        }));

        engine.emit(Some(RawGaze::new(1.0, 2.0)), 0.0);
        engine.emit(None, 1.0);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn scripted_failure_surfaces_from_begin() {
        let engine = ScriptedEngine::with_startup(StartupScript::Fail("no camera".into()));
        let err = engine.begin().await.unwrap_err();
        assert!(matches!(err, EngineError::Startup(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_startup_waits_the_scripted_delay() {
        let engine = ScriptedEngine::with_startup(StartupScript::SucceedAfter(
            Duration::from_millis(250),
        ));
        let started = tokio::time::Instant::now();
        engine.begin().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
