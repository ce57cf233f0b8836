//! Errors produced by model constructors and validation routines.

use thiserror::Error;

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("autoplay interval must be positive")]
    ZeroAutoplayInterval,

    #[error("transition duration must be positive")]
    ZeroTransition,

    #[error("{kind} gesture threshold must be positive, got {value}")]
    NonPositiveThreshold { kind: &'static str, value: f32 },

    #[error(
        "breakpoints must be ordered: two_up_min ({two_up_min}) must be below three_up_min ({three_up_min})"
    )]
    UnorderedBreakpoints { two_up_min: f32, three_up_min: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
