//! Cancellation shared between a computer search and whoever started it.
//!
//! A [`StopFlag`] is handed to the search through `SearchLimits`, kept by
//! `BackgroundSearch` for `cancel`, and set by `DeadlineTimer` on timeout.
//! Once set it stays set; a new search gets a new flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot stop signal. Clones observe the same signal.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        StopFlag::default()
    }

    /// A flag that is already set, for searches that should answer at once.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    /// Polled by the search between nodes
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stop_is_permanent() {
        let flag = StopFlag::new();
        assert!(!flag.is_stopped());
        flag.stop();
        flag.stop();
        assert!(flag.is_stopped());
    }

    #[test]
    fn test_stop_seen_by_searching_thread() {
        let flag = StopFlag::new();
        let worker = {
            let flag = flag.clone();
            thread::spawn(move || {
                while !flag.is_stopped() {
                    thread::yield_now();
                }
            })
        };
        flag.stop();
        worker.join().unwrap();
    }

    #[test]
    fn test_fresh_flags_are_independent() {
        let first = StopFlag::stopped();
        let second = StopFlag::new();
        assert!(first.is_stopped());
        assert!(!second.is_stopped());
    }
}
