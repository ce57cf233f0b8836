//! Gesture state for an in-progress pointer or touch interaction.
//!
//! Exists only between gesture start and end, and is owned exclusively by
//! one engine instance. The tracker records coordinates; threshold
//! resolution against the configured touch/pointer limits happens in the
//! update layer.

use rondo_model::GestureKind;

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    kind: GestureKind,
    start_x: f32,
    delta: f32,
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin tracking at the given coordinate. A second start replaces the
    /// first (a new contact supersedes a stale one).
    pub fn begin(&mut self, kind: GestureKind, x: f32) {
        self.active = Some(ActiveGesture {
            kind,
            start_x: x,
            delta: 0.0,
        });
    }

    /// Update the accumulated delta from the current coordinate.
    /// Ignored when no gesture is in progress.
    pub fn update(&mut self, x: f32) {
        if let Some(gesture) = &mut self.active {
            gesture.delta = x - gesture.start_x;
        }
    }

    /// Finish the gesture, yielding its kind and final accumulated delta.
    pub fn finish(&mut self) -> Option<(GestureKind, f32)> {
        self.active.take().map(|g| (g.kind, g.delta))
    }
}
