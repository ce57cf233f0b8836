//! Safe-list replication and loop-track assembly.
//!
//! The engine windows over item *indices*; callers map them back to their
//! own items when rendering. The safe list replicates `0..item_count` in
//! whole copies until it is long enough to buffer; the loop track wraps it
//! with head and tail buffer copies so circular navigation never shows an
//! empty slot.

use crate::constants::track::MIN_SAFE_SLOTS;

/// Replicate `0..item_count` in whole copies until the result holds at
/// least `max(per_view + 2, MIN_SAFE_SLOTS)` entries.
///
/// An empty input stays empty. The result length is always a multiple of
/// `item_count`.
pub fn build_safe_list(item_count: usize, per_view: usize) -> Vec<usize> {
    if item_count == 0 {
        return Vec::new();
    }
    let min_len = (per_view + 2).max(MIN_SAFE_SLOTS);
    let copies = min_len.div_ceil(item_count);
    let mut safe = Vec::with_capacity(copies * item_count);
    for _ in 0..copies {
        safe.extend(0..item_count);
    }
    safe
}

/// Wrap a safe list with buffers: the last `per_view * 2` entries
/// prepended, the first `per_view * 2` appended.
///
/// Requires `safe.len() >= per_view * 2`, which `build_safe_list`
/// guarantees for `per_view <= 3` (its minimum length is 6).
pub fn build_loop_track(safe: &[usize], per_view: usize) -> Vec<usize> {
    if safe.is_empty() {
        return Vec::new();
    }
    let buffer = per_view * 2;
    debug_assert!(buffer <= safe.len());

    let mut track = Vec::with_capacity(safe.len() + 2 * buffer);
    track.extend_from_slice(&safe[safe.len() - buffer..]);
    track.extend_from_slice(safe);
    track.extend_from_slice(&safe[..buffer]);
    track
}
