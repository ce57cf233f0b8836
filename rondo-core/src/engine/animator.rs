//! Transition clock: time-based progress toward the current track index.
//!
//! Rendering surfaces that interpolate can read eased progress from
//! [`TransitionClock::tick`]; surfaces that animate on their own (CSS
//! transitions) instead report completion through
//! [`TransitionClock::finish_now`]. Either way exactly one `Finished` is
//! observed per settled transition, which is what gates the loop-teleport
//! check.

use std::time::{Duration, Instant};

use crate::constants::timing::EASING_KIND;

/// Outcome of advancing the clock to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionTick {
    /// No transition in flight.
    Idle,
    /// In flight; `progress` is eased into `0.0..1.0`.
    Running { progress: f32 },
    /// The transition settled at this tick.
    Finished,
}

#[derive(Debug, Clone)]
pub struct TransitionClock {
    started_at: Option<Instant>,
    duration: Duration,
    easing_kind: u8, // 0=Linear,1=EaseIn,2=EaseOut,3=EaseInOut
}

impl Default for TransitionClock {
    fn default() -> Self {
        Self {
            started_at: None,
            duration: Duration::ZERO,
            easing_kind: EASING_KIND,
        }
    }
}

impl TransitionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start a transition, or retarget the one in flight. A retargeted
    /// transition restarts its clock; only the final settle reports
    /// `Finished`.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.started_at = Some(now);
        self.duration = duration;
    }

    /// Settle immediately (external transition-completion signal).
    /// Returns whether a transition was actually in flight.
    pub fn finish_now(&mut self) -> bool {
        self.started_at.take().is_some()
    }

    /// Cancel the current transition immediately. Unlike [`finish_now`]
    /// this never counts as a settle; rebuilds use it to discard
    /// transitions aimed at stale geometry.
    ///
    /// [`finish_now`]: TransitionClock::finish_now
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Advance to `now`. Returns `Finished` exactly once per transition.
    pub fn tick(&mut self, now: Instant) -> TransitionTick {
        let Some(started_at) = self.started_at else {
            return TransitionTick::Idle;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.started_at = None;
            return TransitionTick::Finished;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        TransitionTick::Running {
            progress: apply_easing(t, self.easing_kind),
        }
    }
}

fn apply_easing(t: f32, kind: u8) -> f32 {
    match kind {
        1 => t * t,                       // EaseIn (quad)
        2 => 1.0 - (1.0 - t) * (1.0 - t), // EaseOut (quad)
        3 => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - 2.0 * (1.0 - t) * (1.0 - t)
            }
        } // EaseInOut (quad)
        _ => t,                           // Linear
    }
}
