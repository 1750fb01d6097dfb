//! Process-global default engine slot.
//!
//! Mirrors the convention of resolving the tracker from a global binding when
//! the host does not hand one to the extension directly. The slot is explicit
//! and optional; hosts that pass an engine in their config never touch it.

use crate::engine::GazeEngine;
use parking_lot::RwLock;
use std::sync::Arc;

static DEFAULT_ENGINE: RwLock<Option<Arc<dyn GazeEngine>>> = RwLock::new(None);

/// Installs `engine` as the process-wide fallback, replacing any previous one.
pub fn install_default_engine(engine: Arc<dyn GazeEngine>) {
    *DEFAULT_ENGINE.write() = Some(engine);
}

/// Returns the installed fallback engine, if any.
pub fn default_engine() -> Option<Arc<dyn GazeEngine>> {
    DEFAULT_ENGINE.read().clone()
}

/// Removes the fallback engine.
pub fn clear_default_engine() {
    *DEFAULT_ENGINE.write() = None;
}
