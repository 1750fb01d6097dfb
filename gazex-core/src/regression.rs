use serde::{Deserialize, Serialize};

/// Regression models the external engine can run. Names are matched exactly
/// against the engine's camelCase set; misspellings are rejected like any
/// other unknown name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegressionModel {
    Ridge,
    WeightedRidge,
    ThreadedRidge,
}

impl RegressionModel {
    pub const VALID_NAMES: [&'static str; 3] = ["ridge", "weightedRidge", "threadedRidge"];

    /// Parses an engine-facing model name; `None` for anything outside the
    /// valid set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ridge" => Some(Self::Ridge),
            "weightedRidge" => Some(Self::WeightedRidge),
            "threadedRidge" => Some(Self::ThreadedRidge),
            _ => None,
        }
    }

    /// Name understood by the engine's `set_regression` command.
    pub fn as_name(&self) -> &'static str {
        match self {
            Self::Ridge => "ridge",
            Self::WeightedRidge => "weightedRidge",
            Self::ThreadedRidge => "threadedRidge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_valid_names() {
        for name in RegressionModel::VALID_NAMES {
            let model = RegressionModel::from_name(name).unwrap();
            assert_eq!(model.as_name(), name);
        }
    }

    #[test]
    fn rejects_unknown_and_misspelled_names() {
        assert!(RegressionModel::from_name("bogus").is_none());
        assert!(RegressionModel::from_name("weigthedRidge").is_none());
        assert!(RegressionModel::from_name("Ridge").is_none());
    }
}
