//! Carousel engine constants
//!
//! Shared tunables for track sizing and animation defaults. Tuning should
//! happen here so all carousels update consistently; per-instance knobs
//! live in `rondo_model::CarouselConfig`.

/// Track replication bounds.
pub mod track {
    /// Minimum safe-list length after whole-copy replication. Together with
    /// `per_view + 2` this guarantees the head/tail buffers (each
    /// `per_view * 2` slots) never exceed one safe-list period.
    pub const MIN_SAFE_SLOTS: usize = 6;
}

/// Animation defaults shared by transition rendering.
pub mod timing {
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub const EASING_KIND: u8 = 2; // EaseOut

    /// Suggested host tick interval (ms). Any cadence at or below the
    /// shortest of (autoplay interval, transition duration) observes every
    /// state change; finer cadences only smooth rendering.
    pub const TICK_MS: u64 = 33; // ~30Hz
}
