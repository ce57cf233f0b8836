//! rondo engine library
//!
//! This crate contains the headless carousel engine: loop-track windowing,
//! index teleportation, autoplay timing, and gesture interpretation. Hosts
//! drive it through [`CarouselMessage`] values and render from the state it
//! exposes; see `rondoctl` for a terminal host.

pub mod constants;
pub mod engine;
pub mod registry;

pub use engine::messages::{CarouselEvent, CarouselMessage};
pub use engine::state::CarouselEngine;
pub use engine::update::handle_message;
pub use registry::CarouselRegistry;

pub use rondo_model::{
    Breakpoints, CarouselConfig, CarouselKey, ConfigError, Direction,
    GestureKind,
};
