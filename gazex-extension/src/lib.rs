//! Adapter between a trial-sequencing host and an external gaze-prediction
//! engine.
//!
//! The host drives the extension through the usual lifecycle hooks
//! (`initialize` once, then `on_start` → `on_load` → `on_finish` per trial);
//! the extension forwards commands to the engine, buffers the samples the
//! engine pushes back during an active trial, and hands the buffer to the
//! host at trial finish. Everything hard (gaze estimation, regression, video
//! processing) stays inside the engine behind [`gazex_engine::GazeEngine`].

pub mod config;
pub mod error;
pub mod extension;
pub mod observers;
pub mod state;

pub use config::GazeConfig;
pub use error::ExtensionError;
pub use extension::GazeExtension;
pub use observers::{GazeCallback, ObserverId, ObserverRegistry};
pub use state::{ExtensionState, LifecyclePhase};
