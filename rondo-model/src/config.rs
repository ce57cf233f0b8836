//! Static configuration for a carousel instance. These can be derived from
//! presets (hero, strip) or provided ad-hoc by callsites.

use crate::breakpoints::Breakpoints;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Whether the carousel advances on its own while unpaused.
    pub autoplay: bool,
    /// Autoplay cadence in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Transition duration in milliseconds while animation is enabled.
    pub transition_ms: u64,
    /// Whether manual prev/next affordances are rendered.
    pub show_arrows: bool,
    /// Minimum accumulated touch delta that commits a swipe navigation.
    pub touch_swipe_threshold: f32,
    /// Minimum accumulated pointer delta that commits a drag navigation.
    pub pointer_drag_threshold: f32,
    /// Width thresholds deriving the visible slot count.
    pub breakpoints: Breakpoints,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: 2500,
            transition_ms: 700,
            show_arrows: true,
            touch_swipe_threshold: 60.0,
            pointer_drag_threshold: 80.0,
            breakpoints: Breakpoints::new(768.0, 1024.0),
        }
    }
}

impl CarouselConfig {
    /// Defaults for a front-page hero rotation: autoplay on, arrows shown.
    pub const fn hero_defaults() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: 2500,
            transition_ms: 700,
            show_arrows: true,
            touch_swipe_threshold: 60.0,
            pointer_drag_threshold: 80.0,
            breakpoints: Breakpoints::new(768.0, 1024.0),
        }
    }

    /// Defaults for an inline content strip: manual navigation only.
    pub const fn strip_defaults() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: 4000,
            transition_ms: 450,
            show_arrows: true,
            touch_swipe_threshold: 60.0,
            pointer_drag_threshold: 80.0,
            breakpoints: Breakpoints::new(768.0, 1024.0),
        }
    }

    /// Reject configurations the engine cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        if self.transition_ms == 0 {
            return Err(ConfigError::ZeroTransition);
        }
        if self.touch_swipe_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold {
                kind: "touch",
                value: self.touch_swipe_threshold,
            });
        }
        if self.pointer_drag_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold {
                kind: "pointer",
                value: self.pointer_drag_threshold,
            });
        }
        if self.breakpoints.two_up_min >= self.breakpoints.three_up_min {
            return Err(ConfigError::UnorderedBreakpoints {
                two_up_min: self.breakpoints.two_up_min,
                three_up_min: self.breakpoints.three_up_min,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CarouselConfig::default().validate().is_ok());
        assert!(CarouselConfig::hero_defaults().validate().is_ok());
        assert!(CarouselConfig::strip_defaults().validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = CarouselConfig {
            autoplay_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAutoplayInterval));
    }

    #[test]
    fn zero_transition_rejected() {
        let cfg = CarouselConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTransition));
    }

    #[test]
    fn non_positive_thresholds_rejected() {
        let cfg = CarouselConfig {
            touch_swipe_threshold: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveThreshold { kind: "touch", .. })
        ));

        let cfg = CarouselConfig {
            pointer_drag_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveThreshold { kind: "pointer", .. })
        ));
    }

    #[test]
    fn unordered_breakpoints_rejected() {
        let cfg = CarouselConfig {
            breakpoints: Breakpoints::new(1024.0, 768.0),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnorderedBreakpoints { .. })
        ));
    }
}
