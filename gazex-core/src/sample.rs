use serde::{Deserialize, Serialize};

/// One on-screen gaze estimate.
///
/// `t` is the rounded elapsed time in milliseconds since trial load and is
/// only present on samples that were buffered during an active trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u64>,
}

impl GazeSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, t: None }
    }

    pub fn with_t(x: f64, y: f64, t: u64) -> Self {
        Self { x, y, t: Some(t) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_omitted_when_absent() {
        let json = serde_json::to_string(&GazeSample::new(10.0, 20.0)).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":20.0}"#);
    }

    #[test]
    fn t_serialized_when_present() {
        let json = serde_json::to_string(&GazeSample::with_t(10.0, 20.0, 35)).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":20.0,"t":35}"#);
    }
}
