//! Message dispatch for the carousel engine.

use std::time::Instant;

use rondo_model::{Direction, GestureKind};

use super::animator::TransitionTick;
use super::messages::{CarouselEvent, CarouselMessage};
use super::state::CarouselEngine;

/// Apply one message at timestamp `now` and return the events that
/// occurred. All mutation is synchronous; callers decide the cadence.
pub fn handle_message(
    engine: &mut CarouselEngine,
    msg: CarouselMessage,
    now: Instant,
) -> Vec<CarouselEvent> {
    let mut events = Vec::new();
    match msg {
        CarouselMessage::Next => {
            advance(engine, Direction::Forward, now, &mut events)
        }
        CarouselMessage::Prev => {
            advance(engine, Direction::Backward, now, &mut events)
        }
        CarouselMessage::PointerEntered => engine.set_hovering(true),
        CarouselMessage::PointerExited => {
            // Leaving mid-gesture ends the gesture with its last delta.
            resolve_gesture(engine, now, &mut events);
            engine.set_hovering(false);
        }
        CarouselMessage::GestureStarted { kind, x } => {
            engine.gestures.begin(kind, x)
        }
        CarouselMessage::GestureMoved { x } => engine.gestures.update(x),
        CarouselMessage::GestureEnded => {
            resolve_gesture(engine, now, &mut events)
        }
        CarouselMessage::Tick => handle_tick(engine, now, &mut events),
        CarouselMessage::TransitionFinished => {
            if engine.transition.finish_now() {
                settle(engine, &mut events);
            }
        }
        CarouselMessage::ViewportResized(width) => {
            if engine.set_viewport_width(width) {
                events.push(CarouselEvent::Rebuilt {
                    per_view: engine.per_view(),
                });
            }
        }
        CarouselMessage::ItemsChanged(count) => {
            if engine.set_item_count(count) {
                events.push(CarouselEvent::Rebuilt {
                    per_view: engine.per_view(),
                });
            }
        }
    }
    engine.sync_autoplay(now);
    events
}

fn handle_tick(
    engine: &mut CarouselEngine,
    now: Instant,
    events: &mut Vec<CarouselEvent>,
) {
    // Re-enable before anything animates this frame, so a teleport from
    // the previous frame stays invisible but the next step animates.
    engine.restore_animation_if_pending();

    if engine.transition.tick(now) == TransitionTick::Finished {
        settle(engine, events);
    }

    if engine.autoplay.fire(now) {
        advance(engine, Direction::Forward, now, events);
    }
}

/// A settled transition is the only point where the loop may teleport;
/// the check is never run speculatively.
fn settle(engine: &mut CarouselEngine, events: &mut Vec<CarouselEvent>) {
    events.push(CarouselEvent::TransitionSettled);
    if let Some((from, to)) = engine.teleport_check() {
        log::debug!("loop teleport: {from} -> {to}");
        events.push(CarouselEvent::Teleported { from, to });
    }
}

fn advance(
    engine: &mut CarouselEngine,
    direction: Direction,
    now: Instant,
    events: &mut Vec<CarouselEvent>,
) {
    if engine.advance(direction, now) {
        events.push(CarouselEvent::Advanced {
            direction,
            track_index: engine.track_index(),
        });
    }
}

fn resolve_gesture(
    engine: &mut CarouselEngine,
    now: Instant,
    events: &mut Vec<CarouselEvent>,
) {
    let Some((kind, delta)) = engine.gestures.finish() else {
        return;
    };
    let threshold = match kind {
        GestureKind::Touch => engine.config().touch_swipe_threshold,
        GestureKind::Pointer => engine.config().pointer_drag_threshold,
    };
    // Contact moved right -> content moves right -> the previous item
    // enters; opposite sign advances forward.
    if delta > threshold {
        advance(engine, Direction::Backward, now, events);
    } else if delta < -threshold {
        advance(engine, Direction::Forward, now, events);
    }
}
