use crate::sample::GazeSample;
use crate::target::TargetRect;
use serde::{Deserialize, Serialize};

/// Per-trial parameters relevant to gaze tracking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialParams {
    /// Selectors of elements whose bounding boxes should be snapshotted at
    /// trial load.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl TrialParams {
    pub fn with_targets<S: Into<String>>(targets: impl IntoIterator<Item = S>) -> Self {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result record returned from `on_finish`, merged into the host's trial data.
///
/// Serializes under the `webgazer_data` / `webgazer_targets` keys the host
/// ecosystem expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialGazeRecord {
    #[serde(rename = "webgazer_data")]
    pub samples: Vec<GazeSample>,
    #[serde(rename = "webgazer_targets")]
    pub targets: Vec<TargetRect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_host_facing_keys() {
        let record = TrialGazeRecord {
            samples: vec![GazeSample::with_t(1.0, 2.0, 3)],
            targets: vec![TargetRect::new("#a", 0.0, 1.0, 0.0, 1.0)],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("webgazer_data").is_some());
        assert!(json.get("webgazer_targets").is_some());
    }
}
