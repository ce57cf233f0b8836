//! The carousel engine: track construction, index state, timing, gestures.

pub mod animator;
pub mod autoplay;
pub mod gestures;
pub mod messages;
pub mod state;
pub mod track;
pub mod update;

pub use messages::{CarouselEvent, CarouselMessage};
pub use state::CarouselEngine;
pub use update::handle_message;
