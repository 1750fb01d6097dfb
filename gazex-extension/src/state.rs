use gazex_core::{GazeSample, TargetRect, TrialGazeRecord};
use gazex_engine::RawGaze;
use std::time::Duration;

/// Lifecycle of one extension instance. `Paused` and `Active` are the two
/// faces of the ready state, alternated by `resume`/`pause` and by the
/// trial hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Initializing,
    Paused,
    Active,
}

/// Mutable state owned by a [`crate::GazeExtension`]. All mutation happens
/// under the extension's lock, from the lifecycle hooks or the engine
/// listener.
pub struct ExtensionState {
    pub initialized: bool,
    pub starting: bool,
    pub active_trial: bool,
    pub round_predictions: bool,
    pub trial_start: Option<Duration>,
    pub trial_data: Vec<GazeSample>,
    pub trial_targets: Vec<TargetRect>,
    pub current_gaze: Option<GazeSample>,
}

impl ExtensionState {
    pub fn new(round_predictions: bool) -> Self {
        Self {
            initialized: false,
            starting: false,
            active_trial: false,
            round_predictions,
            trial_start: None,
            trial_data: Vec::new(),
            trial_targets: Vec::new(),
            current_gaze: None,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        if self.starting {
            LifecyclePhase::Initializing
        } else if !self.initialized {
            LifecyclePhase::Uninitialized
        } else if self.active_trial {
            LifecyclePhase::Active
        } else {
            LifecyclePhase::Paused
        }
    }

    /// Trial-start hook: the buffer and target list are fully replaced, never
    /// appended across trials.
    pub fn reset_trial(&mut self) {
        self.trial_data = Vec::new();
        self.trial_targets = Vec::new();
    }

    /// Trial-load hook: stamps the trial start and opens the buffering gate.
    pub fn load_trial(&mut self, now: Duration) {
        self.trial_start = Some(now);
        self.active_trial = true;
    }

    /// Trial-finish hook: closes the gate and hands the buffered samples and
    /// target snapshots to the host.
    pub fn finish_trial(&mut self) -> TrialGazeRecord {
        self.active_trial = false;
        TrialGazeRecord {
            samples: std::mem::take(&mut self.trial_data),
            targets: std::mem::take(&mut self.trial_targets),
        }
    }

    /// Gaze pipeline. `None` means the engine currently detects nothing:
    /// the last prediction is cleared and nothing is buffered or broadcast.
    /// Otherwise the returned sample has been buffered (when a trial is
    /// active) and must be broadcast to observers by the caller.
    pub fn ingest(&mut self, raw: Option<RawGaze>, now: Duration) -> Option<GazeSample> {
        let raw = match raw {
            Some(raw) => raw,
            None => {
                self.current_gaze = None;
                return None;
            }
        };

        let mut sample = if self.round_predictions {
            GazeSample::new(raw.x.round(), raw.y.round())
        } else {
            GazeSample::new(raw.x, raw.y)
        };

        if self.active_trial {
            if let Some(start) = self.trial_start {
                let elapsed = now.saturating_sub(start);
                sample.t = Some((elapsed.as_secs_f64() * 1000.0).round() as u64);
                self.trial_data.push(sample.clone());
            }
        }

        self.current_gaze = Some(sample.clone());
        Some(sample)
    }
}
