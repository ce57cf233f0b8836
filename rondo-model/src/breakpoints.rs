//! Responsive breakpoints mapping viewport width to visible slot count.

/// Width thresholds (in the host's horizontal units) above which the
/// carousel shows two or three slots at once.
///
/// The derived slot count is always in `1..=3`; hosts with unusual units
/// (the terminal exerciser passes column counts) supply their own
/// thresholds and get the same clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Minimum viewport width at which two slots are shown.
    pub two_up_min: f32,
    /// Minimum viewport width at which three slots are shown.
    pub three_up_min: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            two_up_min: 768.0,
            three_up_min: 1024.0,
        }
    }
}

impl Breakpoints {
    pub const fn new(two_up_min: f32, three_up_min: f32) -> Self {
        Self {
            two_up_min,
            three_up_min,
        }
    }

    /// Number of slots visible at the given viewport width.
    pub fn per_view(&self, viewport_width: f32) -> usize {
        const MIN_SLOTS: usize = 1;
        const MAX_SLOTS: usize = 3;

        let slots = if viewport_width >= self.three_up_min {
            3
        } else if viewport_width >= self.two_up_min {
            2
        } else {
            1
        };
        slots.clamp(MIN_SLOTS, MAX_SLOTS)
    }
}
