use async_trait::async_trait;
use gazex_core::RegressionModel;
use thiserror::Error;

/// Raw estimate as produced by the tracker, before any rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawGaze {
    pub x: f64,
    pub y: f64,
}

impl RawGaze {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Listener the engine invokes whenever a new estimate (or an explicit "no
/// detection", passed as `None`) becomes available. The second argument is
/// the engine's own elapsed-time report in milliseconds.
pub type GazeListener = Box<dyn FnMut(Option<RawGaze>, f64) + Send>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine startup failed: {0}")]
    Startup(String),
}

/// Narrow capability interface over the external gaze-prediction engine.
///
/// The adapter only ever commands the engine through this surface; any
/// conforming implementation (a real tracker binding or [`crate::ScriptedEngine`])
/// can be substituted.
#[async_trait]
pub trait GazeEngine: Send + Sync {
    /// Registers the single listener the engine feeds estimates to,
    /// replacing any previous one.
    fn set_gaze_listener(&self, listener: GazeListener);

    /// Starts the engine (camera acquisition, model load). May be called
    /// again after a failure.
    async fn begin(&self) -> Result<(), EngineError>;

    fn pause(&self);
    fn resume(&self);

    /// Clears accumulated calibration data.
    fn clear_data(&self);

    fn show_video(&self, show: bool);
    fn show_face_overlay(&self, show: bool);
    fn show_face_feedback_box(&self, show: bool);
    fn show_prediction_points(&self, show: bool);

    /// Records a calibration sample at logical screen coordinates, tagged
    /// with the interaction kind that produced it (e.g. "click").
    fn record_screen_position(&self, x: f64, y: f64, kind: &str);

    fn set_regression(&self, model: RegressionModel);

    fn add_mouse_event_listeners(&self);
    fn remove_mouse_event_listeners(&self);

    /// Whether the engine's internal face tracker is ready to predict.
    fn prediction_ready(&self) -> bool;
}
