//! Message and event types for driving a carousel engine.

use rondo_model::{Direction, GestureKind};

/// Input events a host feeds into [`handle_message`]. Timestamps enter
/// through that function's `now` parameter, so messages stay plain data.
///
/// [`handle_message`]: super::update::handle_message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    /// Manual "next" affordance.
    Next,
    /// Manual "previous" affordance.
    Prev,

    /// Pointer or finger entered the carousel surface (pauses autoplay).
    PointerEntered,
    /// Pointer left the surface. Ends any in-progress gesture with its
    /// last known delta before releasing the pause.
    PointerExited,

    /// A drag or swipe began at the given horizontal coordinate.
    GestureStarted { kind: GestureKind, x: f32 },
    /// The contact moved to a new horizontal coordinate.
    GestureMoved { x: f32 },
    /// The contact lifted; the accumulated delta resolves against the
    /// configured threshold for its kind.
    GestureEnded,

    /// Host frame/timer tick: drives the autoplay deadline, the
    /// transition clock, and the one-frame animation re-enable.
    Tick,
    /// The rendering surface reports its transition completed (for
    /// surfaces that animate on their own instead of polling the clock).
    TransitionFinished,

    /// Viewport width changed.
    ViewportResized(f32),
    /// The host's item list changed length.
    ItemsChanged(usize),
}

/// Observable outcomes of one [`handle_message`] call, in occurrence
/// order.
///
/// [`handle_message`]: super::update::handle_message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The cursor stepped one slot.
    Advanced {
        direction: Direction,
        track_index: isize,
    },
    /// A transition settled (internal clock expiry or external signal).
    TransitionSettled,
    /// The cursor was relocated by one safe-list period, unanimated.
    Teleported { from: isize, to: isize },
    /// Safe list and loop track were rebuilt (item or per-view change).
    Rebuilt { per_view: usize },
}
