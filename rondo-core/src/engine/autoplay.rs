//! Deadline-based autoplay timer.
//!
//! The engine arms a single deadline instead of owning an OS timer; the
//! host's tick drives it. Tearing the timer down and recreating it (the
//! rule when autoplay, interval, pause state, or per-view changes) is a
//! disarm followed by a fresh arm.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm a full interval from `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Replace the interval; an armed timer restarts from `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.deadline.is_some() {
            self.arm(now);
        }
    }

    /// True exactly when the deadline has been reached; re-arms a full
    /// interval from `now`. A late tick yields one firing, not a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
