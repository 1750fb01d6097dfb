pub mod engine;
pub mod global;
pub mod scripted;

pub use engine::{EngineError, GazeEngine, GazeListener, RawGaze};
pub use global::{clear_default_engine, default_engine, install_default_engine};
pub use scripted::{EngineCommand, ScriptedEngine, StartupScript};
