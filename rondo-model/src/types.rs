//! Direction and gesture discriminants used throughout the engine.

/// Navigation direction along the carousel track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward higher track indices (content moves left).
    Forward,
    /// Toward lower track indices (content moves right).
    Backward,
}

impl Direction {
    /// Signed single-step increment applied to the track index.
    pub const fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Input modality of an in-progress gesture.
///
/// Touch swipes and pointer drags share the same delta-threshold logic but
/// carry distinct thresholds (see `CarouselConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    Touch,
    Pointer,
}
