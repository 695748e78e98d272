//! Deadline timer that trips a stop flag.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::sync::StopFlag;

/// A timer that signals a stop flag when its duration elapses.
///
/// The timer runs on its own thread. Cancelling or dropping it before the
/// deadline leaves the flag alone.
pub struct DeadlineTimer {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    stop_flag: StopFlag,
}

impl DeadlineTimer {
    /// Start a timer that will stop `stop_flag` after `duration`.
    ///
    /// A zero duration stops the flag immediately and returns `None`.
    #[must_use]
    pub fn start(duration: Duration, stop_flag: StopFlag) -> Option<Self> {
        if duration.is_zero() {
            stop_flag.stop();
            return None;
        }

        let (cancel, cancelled) = mpsc::channel::<()>();
        let flag = stop_flag.clone();
        let handle = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = cancelled.recv_timeout(duration) {
                flag.stop();
            }
        });

        Some(DeadlineTimer {
            cancel: Some(cancel),
            handle: Some(handle),
            stop_flag,
        })
    }

    /// Cancel the timer without triggering the stop flag.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Check if the flag this timer guards has been stopped.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.stop_flag.is_stopped()
    }

    fn shutdown(&mut self) {
        // dropping the sender wakes the timer thread with `Disconnected`
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_triggers() {
        let flag = StopFlag::new();
        let timer = DeadlineTimer::start(Duration::from_millis(20), flag.clone());
        assert!(timer.is_some());

        thread::sleep(Duration::from_millis(200));
        assert!(flag.is_stopped());
        assert!(timer.is_some_and(|t| t.is_triggered()));
    }

    #[test]
    fn test_timer_zero_duration() {
        let flag = StopFlag::new();
        let timer = DeadlineTimer::start(Duration::ZERO, flag.clone());
        assert!(timer.is_none());
        assert!(flag.is_stopped());
    }

    #[test]
    fn test_cancel_leaves_flag_clear() {
        let flag = StopFlag::new();
        let timer = DeadlineTimer::start(Duration::from_secs(60), flag.clone())
            .expect("non-zero duration starts a timer");
        timer.cancel();
        assert!(!flag.is_stopped());
    }
}
