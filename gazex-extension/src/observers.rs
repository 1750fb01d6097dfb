use gazex_core::GazeSample;
use parking_lot::Mutex;
use std::sync::Arc;

/// Callback invoked with every sample that passes the gaze pipeline.
pub type GazeCallback = Box<dyn FnMut(&GazeSample) + Send>;

/// Handle returned from registration; removing by id keeps unsubscription
/// explicit and idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered observer collection. Notification walks entries in registration
/// order, which stays stable across unrelated removals.
///
/// Each callback sits behind its own lock so a notifier can snapshot the
/// entry list, release the registry, and invoke callbacks without holding
/// it; an observer may then remove itself (or register others) from inside
/// its own callback.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(ObserverId, Arc<Mutex<GazeCallback>>)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, callback: GazeCallback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Arc::new(Mutex::new(callback))));
        id
    }

    /// Removes the observer registered under `id`. Returns false when the id
    /// is unknown or already removed.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Current callbacks in registration order.
    pub fn snapshot(&self) -> Vec<Arc<Mutex<GazeCallback>>> {
        self.entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect()
    }

    pub fn notify(&self, sample: &GazeSample) {
        for (_, callback) in &self.entries {
            (&mut *callback.lock())(sample);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
