use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Trait for monotonic session clocks.
///
/// `now` is the elapsed time since the clock's own epoch; callers only ever
/// take differences, so the epoch itself is arbitrary.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;

    fn elapsed(&self, since: Duration) -> Duration {
        self.now().saturating_sub(since)
    }

    /// Elapsed milliseconds since `since`, rounded to the nearest integer.
    fn elapsed_ms(&self, since: Duration) -> u64 {
        (self.elapsed(since).as_secs_f64() * 1000.0).round() as u64
    }
}

/// Wall-clock-independent production clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Manually advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ns: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn advance(&self, d: Duration) {
        self.now_ns.fetch_add(d.as_nanos() as u64, Ordering::SeqCst);
    }

    pub fn set(&self, d: Duration) {
        self.now_ns.store(d.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.now_ns.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_only_on_request() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.elapsed_ms(start), 0);

        clock.advance(Duration::from_millis(120));
        assert_eq!(clock.elapsed_ms(start), 120);

        clock.advance(Duration::from_micros(500));
        // 120.5 ms rounds up
        assert_eq!(clock.elapsed_ms(start), 121);
    }
}
