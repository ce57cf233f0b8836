//! Scripted engine runs: autoplay cycles, an optional mid-run resize, and
//! an optional closing swipe, reported step by step.

use std::time::{Duration, Instant};

use anyhow::Result;
use rondo_core::{
    CarouselEngine, CarouselEvent, CarouselMessage, GestureKind,
    handle_message,
};
use rondo_model::CarouselConfig;

#[derive(Debug)]
pub struct Options {
    pub items: usize,
    pub width: f32,
    pub steps: u64,
    pub resize_to: Option<f32>,
    pub swipe: Option<f32>,
    pub json: bool,
    pub config: CarouselConfig,
}

pub fn run(opts: Options) -> Result<()> {
    log::info!(
        "simulating {} items at width {} over {} steps",
        opts.items,
        opts.width,
        opts.steps
    );
    let base = Instant::now();
    let mut engine =
        CarouselEngine::new(opts.config, opts.items, opts.width, base)?;
    let interval =
        Duration::from_millis(engine.config().autoplay_interval_ms);
    let transition = Duration::from_millis(engine.config().transition_ms);

    report(0, &engine, &[], opts.json);

    let mut t = base;
    for step in 1..=opts.steps {
        let mut events = Vec::new();

        if let Some(width) = opts.resize_to
            && step == opts.steps / 2 + 1
        {
            events.extend(handle_message(
                &mut engine,
                CarouselMessage::ViewportResized(width),
                t,
            ));
        }

        // One autoplay cycle: the deadline tick advances, the next tick
        // settles the transition (and teleports at the wrap).
        t += interval;
        events.extend(handle_message(&mut engine, CarouselMessage::Tick, t));
        t += transition;
        events.extend(handle_message(&mut engine, CarouselMessage::Tick, t));

        report(step, &engine, &events, opts.json);
    }

    if let Some(delta) = opts.swipe {
        let mut events = Vec::new();
        let start_x = 400.0;
        for msg in [
            CarouselMessage::GestureStarted {
                kind: GestureKind::Touch,
                x: start_x,
            },
            CarouselMessage::GestureMoved { x: start_x + delta },
            CarouselMessage::GestureEnded,
        ] {
            events.extend(handle_message(&mut engine, msg, t));
        }
        t += transition;
        events.extend(handle_message(&mut engine, CarouselMessage::Tick, t));
        report(opts.steps + 1, &engine, &events, opts.json);
    }

    Ok(())
}

fn report(
    step: u64,
    engine: &CarouselEngine,
    events: &[CarouselEvent],
    json: bool,
) {
    if json {
        let line = serde_json::json!({
            "step": step,
            "track_index": engine.track_index(),
            "per_view": engine.per_view(),
            "offset_percent": engine.render_offset_percent(),
            "window": engine.visible_window(),
            "events": events.iter().map(|e| format!("{e:?}")).collect::<Vec<_>>(),
        });
        println!("{line}");
    } else {
        println!(
            "step {step:>3}  index {:>3}  per_view {}  window {:?}  events {:?}",
            engine.track_index(),
            engine.per_view(),
            engine.visible_window(),
            events,
        );
    }
}
