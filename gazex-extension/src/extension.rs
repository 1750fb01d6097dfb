use crate::config::GazeConfig;
use crate::error::ExtensionError;
use crate::observers::{GazeCallback, ObserverId, ObserverRegistry};
use crate::state::{ExtensionState, LifecyclePhase};
use gazex_core::{GazeSample, RegressionModel, StaticLayout, TargetRect, TargetResolver};
use gazex_core::{TrialGazeRecord, TrialParams};
use gazex_engine::GazeEngine;
use gazex_timing::{Clock, MonotonicClock};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

/// The extension instance a host drives through its lifecycle hooks.
///
/// Holds exactly one engine handle for its whole lifetime. All hooks and
/// manual controls take `&self`; state lives behind one lock that is only
/// held for short synchronous sections.
pub struct GazeExtension {
    engine: Arc<dyn GazeEngine>,
    clock: Arc<dyn Clock>,
    resolver: Arc<dyn TargetResolver>,
    state: Arc<Mutex<ExtensionState>>,
    observers: Arc<Mutex<ObserverRegistry>>,
    startup_timeout: Duration,
}

impl GazeExtension {
    /// Builds the extension and wires it to the engine.
    ///
    /// The engine is resolved from `config.engine`, falling back to the
    /// process-global default; without either the call fails before any
    /// engine command is issued. On success the gaze listener is registered
    /// and video, face overlay, feedback box and prediction points are
    /// hidden. With `auto_initialize` the engine is also started (bounded by
    /// `startup_timeout`) and left paused.
    pub async fn initialize(config: GazeConfig) -> Result<Self, ExtensionError> {
        let engine = match config.engine.or_else(gazex_engine::default_engine) {
            Some(engine) => engine,
            None => {
                error!(
                    "gaze extension failed to initialize: no engine in config and no process default installed"
                );
                return Err(ExtensionError::EngineUnavailable);
            }
        };

        let clock: Arc<dyn Clock> = config
            .clock
            .unwrap_or_else(|| Arc::new(MonotonicClock::new()));
        let resolver: Arc<dyn TargetResolver> = config
            .resolver
            .unwrap_or_else(|| Arc::new(StaticLayout::new()));

        let extension = Self {
            engine,
            clock,
            resolver,
            state: Arc::new(Mutex::new(ExtensionState::new(config.round_predictions))),
            observers: Arc::new(Mutex::new(ObserverRegistry::new())),
            startup_timeout: config.startup_timeout,
        };

        let state = extension.state.clone();
        let observers = extension.observers.clone();
        let clock = extension.clock.clone();
        extension
            .engine
            .set_gaze_listener(Box::new(move |raw, _engine_elapsed_ms| {
                let sample = state.lock().ingest(raw, clock.now());
                if let Some(sample) = sample {
                    Self::broadcast(&observers, &sample);
                }
            }));

        extension.hide_video();
        extension.hide_predictions();

        if config.auto_initialize {
            extension.run_startup().await?;
        }

        Ok(extension)
    }

    // --- host lifecycle hooks ---

    /// Trial-start hook: empties the sample buffer and the target list.
    pub fn on_start(&self, _params: &TrialParams) {
        self.state.lock().reset_trial();
    }

    /// Trial-load hook: stamps the trial start, snapshots target bounding
    /// boxes (selectors that match nothing are skipped) and resumes engine
    /// data flow.
    pub fn on_load(&self, params: &TrialParams) {
        let targets: Vec<TargetRect> = params
            .targets
            .iter()
            .filter_map(|selector| self.resolver.bounding_rect(selector))
            .collect();

        {
            let mut state = self.state.lock();
            state.load_trial(self.clock.now());
            state.trial_targets = targets;
        }

        self.engine.resume();
    }

    /// Trial-finish hook: pauses data flow and returns the trial's samples
    /// and target snapshots for the host to merge into its result record.
    pub fn on_finish(&self, _params: &TrialParams) -> TrialGazeRecord {
        self.engine.pause();
        self.state.lock().finish_trial()
    }

    // --- manual control surface ---

    /// Runs engine startup, then disables mouse calibration and pauses data
    /// flow. Retryable after a failure.
    pub async fn start(&self) -> Result<(), ExtensionError> {
        self.run_startup().await
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().initialized
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.state.lock().phase()
    }

    /// Whether the engine's internal face detector is ready to predict.
    pub fn face_detected(&self) -> bool {
        self.engine.prediction_ready()
    }

    pub fn show_predictions(&self) {
        self.engine.show_prediction_points(true);
    }

    pub fn hide_predictions(&self) {
        self.engine.show_prediction_points(false);
    }

    /// Shows the camera feed together with the face overlay and feedback box.
    pub fn show_video(&self) {
        self.engine.show_video(true);
        self.engine.show_face_overlay(true);
        self.engine.show_face_feedback_box(true);
    }

    /// Hides the camera feed together with the face overlay and feedback box.
    pub fn hide_video(&self) {
        self.engine.show_video(false);
        self.engine.show_face_overlay(false);
        self.engine.show_face_feedback_box(false);
    }

    pub fn resume(&self) {
        self.engine.resume();
    }

    pub fn pause(&self) {
        self.engine.pause();
    }

    /// Clears the engine's accumulated calibration data.
    pub fn reset_calibration(&self) {
        self.engine.clear_data();
    }

    pub fn start_mouse_calibration(&self) {
        self.engine.add_mouse_event_listeners();
    }

    pub fn stop_mouse_calibration(&self) {
        self.engine.remove_mouse_event_listeners();
    }

    /// Records a calibration sample as a deliberate click at (x, y).
    pub fn calibrate_point(&self, x: f64, y: f64) {
        self.engine.record_screen_position(x, y, "click");
    }

    /// Switches the engine's regression model. Unknown names are logged and
    /// leave the active model unchanged.
    pub fn set_regression_type(&self, name: &str) {
        match RegressionModel::from_name(name) {
            Some(model) => self.engine.set_regression(model),
            None => warn!(
                regression_type = name,
                "invalid regression_type; valid options are ridge, weightedRidge and threadedRidge"
            ),
        }
    }

    /// Most recent gaze estimate; `None` while the engine detects nothing.
    pub fn current_prediction(&self) -> Option<GazeSample> {
        self.state.lock().current_gaze.clone()
    }

    /// Registers an observer notified synchronously with every sample, in
    /// registration order. Callbacks run on the engine's listener thread;
    /// an observer may remove itself (or register others) from inside its
    /// own callback.
    pub fn on_gaze_update(&self, callback: GazeCallback) -> ObserverId {
        self.observers.lock().register(callback)
    }

    /// Removes the observer registered under `id`; calling it again for the
    /// same id is harmless.
    pub fn off_gaze_update(&self, id: ObserverId) -> bool {
        self.observers.lock().unregister(id)
    }

    /// Invokes the current observers outside the registry lock, so callbacks
    /// are free to register or unregister observers.
    fn broadcast(observers: &Mutex<ObserverRegistry>, sample: &GazeSample) {
        let snapshot = observers.lock().snapshot();
        for callback in snapshot {
            (&mut *callback.lock())(sample);
        }
    }

    async fn run_startup(&self) -> Result<(), ExtensionError> {
        self.state.lock().starting = true;

        match tokio::time::timeout(self.startup_timeout, self.engine.begin()).await {
            Ok(Ok(())) => {
                {
                    let mut state = self.state.lock();
                    state.starting = false;
                    state.initialized = true;
                }
                self.stop_mouse_calibration();
                self.pause();
                Ok(())
            }
            Ok(Err(err)) => {
                self.state.lock().starting = false;
                error!(error = %err, "engine startup failed");
                Err(err.into())
            }
            Err(_) => {
                self.state.lock().starting = false;
                error!(timeout_s = self.startup_timeout.as_secs(), "engine startup timed out");
                Err(ExtensionError::StartupTimeout(self.startup_timeout))
            }
        }
    }
}
