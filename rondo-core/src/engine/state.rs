//! CarouselEngine: loop-track cursor state and teleport arithmetic.

use std::time::{Duration, Instant};

use rondo_model::{CarouselConfig, ConfigError, Direction};

use super::animator::TransitionClock;
use super::autoplay::AutoplayTimer;
use super::gestures::GestureTracker;
use super::track;

/// One carousel instance: windowing state plus its timing and gesture
/// collaborators. All fields are rebuilt together whenever the item count
/// or the derived per-view slot count changes; buffers sized for one
/// per-view are never reused under another.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    item_count: usize,
    viewport_width: f32,
    per_view: usize,

    safe_list: Vec<usize>,
    loop_track: Vec<usize>,
    /// Cursor into the loop track. Signed so that a burst of backward
    /// steps inside one transition window stays well-defined until the
    /// settle teleports it back into range.
    track_index: isize,

    animation_enabled: bool,
    reenable_pending: bool,
    hovering: bool,

    pub(crate) transition: TransitionClock,
    pub(crate) autoplay: AutoplayTimer,
    pub(crate) gestures: GestureTracker,
}

impl CarouselEngine {
    /// Build an engine for `item_count` items at the given viewport width.
    /// `now` seeds the autoplay deadline when autoplay applies.
    pub fn new(
        config: CarouselConfig,
        item_count: usize,
        viewport_width: f32,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            autoplay: AutoplayTimer::new(Duration::from_millis(
                config.autoplay_interval_ms,
            )),
            config,
            item_count,
            viewport_width,
            per_view: 1,
            safe_list: Vec::new(),
            loop_track: Vec::new(),
            track_index: 0,
            animation_enabled: true,
            reenable_pending: false,
            hovering: false,
            transition: TransitionClock::new(),
            gestures: GestureTracker::new(),
        };
        engine.rebuild();
        engine.sync_autoplay(now);
        Ok(engine)
    }

    /// Step the cursor one slot. No-op when fewer than two distinct slots
    /// exist, which after replication only happens for empty input.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> bool {
        if self.safe_list.len() <= 1 {
            return false;
        }
        self.track_index += direction.step();
        self.transition.start(now, self.transition_duration());
        true
    }

    /// Relocate the cursor by one safe-list period when it has drifted
    /// into a buffer region. Runs only after a transition settles.
    ///
    /// Replication (`build_safe_list`) guarantees `total >= per_view + 2`,
    /// so a single jump of `total` always lands strictly between the
    /// limits; the arithmetic here does not defend degenerate totals
    /// itself. The left limit is `per_view`, not the head-buffer size
    /// `per_view * 2`: the wrap triggers one slot before the buffer edge,
    /// and both limits are load-bearing for wrap timing.
    pub(crate) fn teleport_check(&mut self) -> Option<(isize, isize)> {
        let total = self.safe_list.len() as isize;
        if total == 0 {
            return None;
        }
        let left_limit = self.per_view as isize;
        let right_limit = (self.per_view as isize) * 2 + total;
        let from = self.track_index;
        if from <= left_limit {
            self.suspend_animation();
            self.track_index = from + total;
        } else if from >= right_limit {
            self.suspend_animation();
            self.track_index = from - total;
        } else {
            return None;
        }
        Some((from, self.track_index))
    }

    /// Update the viewport width; returns whether a rebuild happened
    /// (i.e. the derived per-view count changed).
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        self.viewport_width = width;
        if self.config.breakpoints.per_view(width) != self.per_view {
            self.rebuild();
            return true;
        }
        false
    }

    /// Replace the configuration at runtime. The autoplay timer restarts
    /// under the new interval, and a breakpoint change that alters the
    /// derived per-view count forces a full rebuild.
    pub fn set_config(
        &mut self,
        config: CarouselConfig,
        now: Instant,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.autoplay.set_interval(
            Duration::from_millis(config.autoplay_interval_ms),
            now,
        );
        if self.config.breakpoints.per_view(self.viewport_width)
            != self.per_view
        {
            self.rebuild();
        }
        self.sync_autoplay(now);
        Ok(())
    }

    /// Update the item count; returns whether a rebuild happened.
    pub fn set_item_count(&mut self, count: usize) -> bool {
        if count != self.item_count {
            self.item_count = count;
            self.rebuild();
            return true;
        }
        false
    }

    fn rebuild(&mut self) {
        self.per_view = self.config.breakpoints.per_view(self.viewport_width);
        self.safe_list = track::build_safe_list(self.item_count, self.per_view);
        self.loop_track = track::build_loop_track(&self.safe_list, self.per_view);
        self.track_index = (self.per_view * 2) as isize;
        // A transition aimed at the old geometry must not settle (and
        // teleport) against the new one.
        self.transition.cancel();
        // Torn down here, recreated by the next sync_autoplay.
        self.autoplay.disarm();
        self.suspend_animation();
        log::debug!(
            "carousel rebuilt: items={} per_view={} safe={} track={} index={}",
            self.item_count,
            self.per_view,
            self.safe_list.len(),
            self.loop_track.len(),
            self.track_index,
        );
    }

    fn suspend_animation(&mut self) {
        self.animation_enabled = false;
        self.reenable_pending = true;
    }

    /// Flip animation back on if a suspension is pending. Called once per
    /// rendering frame (host tick), before anything else animates.
    pub(crate) fn restore_animation_if_pending(&mut self) -> bool {
        if self.reenable_pending {
            self.reenable_pending = false;
            self.animation_enabled = true;
            return true;
        }
        false
    }

    /// Arm or disarm the autoplay deadline according to the current
    /// config, navigability, and pause state.
    pub(crate) fn sync_autoplay(&mut self, now: Instant) {
        let should_run =
            self.config.autoplay && self.can_navigate() && !self.is_paused();
        if should_run && !self.autoplay.is_armed() {
            log::debug!(
                "autoplay armed: interval={}ms",
                self.config.autoplay_interval_ms
            );
            self.autoplay.arm(now);
        } else if !should_run && self.autoplay.is_armed() {
            log::debug!("autoplay disarmed");
            self.autoplay.disarm();
        }
    }

    pub(crate) fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Horizontal translation for the rendering surface, in percent of one
    /// viewport width.
    pub fn render_offset_percent(&self) -> f32 {
        self.track_index as f32 * (100.0 / self.per_view as f32)
    }

    /// Duration the surface should animate the next offset change over.
    /// Zero while animation is suspended (the teleport frame).
    pub fn transition_duration(&self) -> Duration {
        if self.animation_enabled {
            Duration::from_millis(self.config.transition_ms)
        } else {
            Duration::ZERO
        }
    }

    /// The `per_view` item indices currently aligned with the viewport.
    pub fn visible_window(&self) -> &[usize] {
        if self.loop_track.is_empty() {
            return &[];
        }
        let max_start = self.loop_track.len().saturating_sub(self.per_view);
        let start = self.track_index.clamp(0, max_start as isize) as usize;
        let end = (start + self.per_view).min(self.loop_track.len());
        &self.loop_track[start..end]
    }

    pub fn can_navigate(&self) -> bool {
        self.safe_list.len() > 1
    }

    /// Whether manual prev/next affordances should be rendered.
    pub fn arrows_visible(&self) -> bool {
        self.config.show_arrows && self.can_navigate()
    }

    pub fn is_paused(&self) -> bool {
        self.hovering || self.gestures.is_active()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn track_index(&self) -> isize {
        self.track_index
    }

    pub fn safe_list(&self) -> &[usize] {
        &self.safe_list
    }

    pub fn loop_track(&self) -> &[usize] {
        &self.loop_track
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn transition_active(&self) -> bool {
        self.transition.is_active()
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rondo_model::Breakpoints;

    fn engine(item_count: usize, viewport_width: f32) -> CarouselEngine {
        CarouselEngine::new(
            CarouselConfig::default(),
            item_count,
            viewport_width,
            Instant::now(),
        )
        .unwrap()
    }

    #[test]
    fn five_items_three_up_geometry() {
        // 5 items at a desktop width: safe list replicates to 10 (two
        // whole copies), the track adds 4 * per_view buffer slots, and the
        // cursor starts at per_view * 2.
        let engine = engine(5, 1280.0);
        assert_eq!(engine.per_view(), 3);
        assert_eq!(engine.safe_list().len(), 10);
        assert_eq!(engine.loop_track().len(), 22);
        assert_eq!(engine.track_index(), 6);
    }

    #[test]
    fn initial_index_is_double_per_view_for_each_tier() {
        for (width, per_view) in [(500.0, 1), (800.0, 2), (1200.0, 3)] {
            let engine = engine(4, width);
            assert_eq!(engine.per_view(), per_view);
            assert_eq!(engine.track_index(), (per_view * 2) as isize);
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        let engine = engine(0, 1280.0);
        assert!(engine.is_empty());
        assert!(engine.safe_list().is_empty());
        assert!(engine.loop_track().is_empty());
        assert!(engine.visible_window().is_empty());
        assert!(!engine.can_navigate());
        assert!(!engine.arrows_visible());
        assert!(!engine.autoplay_armed());
    }

    #[test]
    fn advance_is_noop_for_empty_input() {
        let mut engine = engine(0, 1280.0);
        let before = engine.track_index();
        assert!(!engine.advance(Direction::Forward, Instant::now()));
        assert_eq!(engine.track_index(), before);
        assert!(!engine.transition_active());
    }

    #[test]
    fn single_item_still_navigates_after_replication() {
        // One distinct item replicates to six slots, so the loop keeps
        // turning; only an empty list is a navigation no-op.
        let mut engine = engine(1, 1280.0);
        assert!(engine.can_navigate());
        assert!(engine.advance(Direction::Forward, Instant::now()));
        assert_eq!(engine.track_index(), 7);
    }

    #[test]
    fn teleport_left_edge_uses_single_per_view_limit() {
        let mut engine = engine(5, 1280.0);
        // per_view=3, total=10: left limit is 3 (not the buffer size 6).
        engine.track_index = 4;
        assert_eq!(engine.teleport_check(), None);
        engine.track_index = 3;
        assert_eq!(engine.teleport_check(), Some((3, 13)));
        assert!(!engine.animation_enabled());
    }

    #[test]
    fn teleport_right_edge() {
        let mut engine = engine(5, 1280.0);
        // right limit = per_view * 2 + total = 16.
        engine.track_index = 15;
        assert_eq!(engine.teleport_check(), None);
        engine.track_index = 16;
        assert_eq!(engine.teleport_check(), Some((16, 6)));
    }

    #[test]
    fn teleport_preserves_visible_window() {
        let mut engine = engine(5, 1280.0);
        for index in [3isize, 2, 16, 17] {
            engine.track_index = index;
            let before = engine.visible_window().to_vec();
            engine.teleport_check().unwrap();
            assert_eq!(
                engine.visible_window(),
                &before[..],
                "teleport from {index} changed the visible items"
            );
        }
    }

    #[test]
    fn animation_restores_on_next_frame() {
        let mut engine = engine(5, 1280.0);
        engine.track_index = 3;
        engine.teleport_check().unwrap();
        assert_eq!(engine.transition_duration(), Duration::ZERO);
        assert!(engine.restore_animation_if_pending());
        assert!(engine.animation_enabled());
        assert_eq!(engine.transition_duration(), Duration::from_millis(700));
        // One-shot: nothing pending afterwards.
        assert!(!engine.restore_animation_if_pending());
    }

    #[test]
    fn resize_rebuilds_for_new_per_view() {
        let mut engine = engine(5, 1280.0);
        assert_eq!(engine.per_view(), 3);
        assert!(engine.set_viewport_width(480.0));
        assert_eq!(engine.per_view(), 1);
        assert_eq!(engine.track_index(), 2);
        // Safe list re-derived for per_view=1: max(1+2, 6) = 6 -> 10 again
        // (whole copies of 5), but the track buffers shrink to 4 * 1.
        assert_eq!(engine.safe_list().len(), 10);
        assert_eq!(engine.loop_track().len(), 14);
    }

    #[test]
    fn resize_within_tier_keeps_state() {
        let mut engine = engine(5, 1280.0);
        engine.track_index = 9;
        assert!(!engine.set_viewport_width(1100.0));
        assert_eq!(engine.track_index(), 9);
    }

    #[test]
    fn item_change_resets_cursor() {
        let mut engine = engine(5, 1280.0);
        engine.track_index = 12;
        assert!(engine.set_item_count(7));
        assert_eq!(engine.track_index(), 6);
        assert_eq!(engine.safe_list().len(), 7);
        assert!(!engine.set_item_count(7));
    }

    #[test]
    fn rebuild_suspends_animation_for_one_frame() {
        let mut engine = engine(5, 1280.0);
        assert!(engine.set_viewport_width(480.0));
        assert_eq!(engine.transition_duration(), Duration::ZERO);
        assert!(engine.restore_animation_if_pending());
    }

    #[test]
    fn render_offset_is_index_per_view_percent() {
        let engine = engine(5, 1280.0);
        let expected = 6.0 * (100.0 / 3.0);
        assert!((engine.render_offset_percent() - expected).abs() < 1e-4);
    }

    #[test]
    fn custom_breakpoints_drive_per_view() {
        let config = CarouselConfig {
            breakpoints: Breakpoints::new(80.0, 120.0),
            ..Default::default()
        };
        let engine =
            CarouselEngine::new(config, 5, 100.0, Instant::now()).unwrap();
        assert_eq!(engine.per_view(), 2);
    }

    #[test]
    fn reconfigure_restarts_autoplay_under_new_interval() {
        let base = Instant::now();
        let mut engine = CarouselEngine::new(
            CarouselConfig::default(),
            5,
            1280.0,
            base,
        )
        .unwrap();
        assert!(engine.autoplay_armed());

        let faster = CarouselConfig {
            autoplay_interval_ms: 1000,
            ..Default::default()
        };
        let later = base + Duration::from_millis(500);
        engine.set_config(faster, later).unwrap();
        assert!(engine.autoplay_armed());
        assert!(!engine.autoplay.fire(later + Duration::from_millis(999)));
        assert!(engine.autoplay.fire(later + Duration::from_millis(1000)));

        // Turning autoplay off tears the deadline down.
        let manual = CarouselConfig {
            autoplay: false,
            ..Default::default()
        };
        engine.set_config(manual, later).unwrap();
        assert!(!engine.autoplay_armed());

        // Invalid replacements are rejected without touching state.
        let bad = CarouselConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert!(engine.set_config(bad, later).is_err());
        assert_eq!(engine.config().transition_ms, 700);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CarouselConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert!(CarouselEngine::new(config, 5, 1280.0, Instant::now()).is_err());
    }
}
