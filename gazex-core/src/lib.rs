pub mod regression;
pub mod sample;
pub mod target;
pub mod trial;

pub use regression::RegressionModel;
pub use sample::GazeSample;
pub use target::{StaticLayout, TargetRect, TargetResolver};
pub use trial::{TrialGazeRecord, TrialParams};
