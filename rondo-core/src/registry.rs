//! Registry for managing multiple carousel engines keyed by CarouselKey.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::Instant;

use rondo_model::{CarouselConfig, CarouselKey, ConfigError};

use crate::engine::state::CarouselEngine;

/// A host page usually runs several independent carousels (articles,
/// projects, per-section strips). Each engine owns its state exclusively;
/// the registry only maps keys to instances.
#[derive(Debug, Clone, Default)]
pub struct CarouselRegistry {
    engines: HashMap<CarouselKey, CarouselEngine>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a mutable reference, creating a new engine with the provided
    /// factory when absent.
    pub fn get_or_insert_with<F>(
        &mut self,
        key: CarouselKey,
        init: F,
    ) -> &mut CarouselEngine
    where
        F: FnOnce() -> CarouselEngine,
    {
        self.engines.entry(key).or_insert_with(init)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselEngine> {
        self.engines.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut CarouselEngine> {
        self.engines.get_mut(key)
    }

    /// Drop the engine for a key. The engine is poll-driven, so removal is
    /// also its cancellation: no deadline or pending frame callback
    /// survives it.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<CarouselEngine> {
        self.engines.remove(key)
    }

    /// Convenience helper creating an engine when absent and bringing
    /// dynamic properties up to date when present, so initial carousels
    /// reflect current counts and viewport without waiting for an event.
    pub fn ensure(
        &mut self,
        key: CarouselKey,
        config: CarouselConfig,
        item_count: usize,
        viewport_width: f32,
        now: Instant,
    ) -> Result<&mut CarouselEngine, ConfigError> {
        match self.engines.entry(key) {
            Entry::Vacant(slot) => {
                let engine = CarouselEngine::new(
                    config,
                    item_count,
                    viewport_width,
                    now,
                )?;
                Ok(slot.insert(engine))
            }
            Entry::Occupied(slot) => {
                let engine = slot.into_mut();
                engine.set_item_count(item_count);
                engine.set_viewport_width(viewport_width);
                engine.sync_autoplay(now);
                Ok(engine)
            }
        }
    }

    /// Snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.engines.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn ensure_creates_then_refreshes() {
        let now = Instant::now();
        let mut registry = CarouselRegistry::new();

        let engine = registry
            .ensure(
                CarouselKey::Articles,
                CarouselConfig::default(),
                5,
                1280.0,
                now,
            )
            .unwrap();
        assert_eq!(engine.per_view(), 3);
        engine.advance(rondo_model::Direction::Forward, now);
        let moved = engine.track_index();

        // Same geometry: the existing engine survives untouched.
        let engine = registry
            .ensure(
                CarouselKey::Articles,
                CarouselConfig::default(),
                5,
                1280.0,
                now,
            )
            .unwrap();
        assert_eq!(engine.track_index(), moved);

        // New count: refreshed in place, not recreated.
        let engine = registry
            .ensure(
                CarouselKey::Articles,
                CarouselConfig::default(),
                8,
                1280.0,
                now,
            )
            .unwrap();
        assert_eq!(engine.item_count(), 8);
        assert_eq!(engine.track_index(), 6);
    }

    #[test]
    fn ensure_rejects_invalid_config_for_new_entries() {
        let mut registry = CarouselRegistry::new();
        let bad = CarouselConfig {
            autoplay_interval_ms: 0,
            ..Default::default()
        };
        assert!(registry
            .ensure(CarouselKey::Projects, bad, 5, 1280.0, Instant::now())
            .is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_are_scoped_per_instance() {
        let now = Instant::now();
        let mut registry = CarouselRegistry::new();
        let section = Uuid::new_v4();
        for key in [
            CarouselKey::Articles,
            CarouselKey::Projects,
            CarouselKey::Section(section),
            CarouselKey::Custom("footer"),
        ] {
            registry
                .ensure(key, CarouselConfig::default(), 3, 800.0, now)
                .unwrap();
        }
        assert_eq!(registry.len(), 4);

        registry
            .get_mut(&CarouselKey::Section(section))
            .unwrap()
            .advance(rondo_model::Direction::Forward, now);
        // Other instances are unaffected.
        assert_eq!(
            registry.get(&CarouselKey::Articles).unwrap().track_index(),
            4
        );
        assert_eq!(
            registry
                .get(&CarouselKey::Section(section))
                .unwrap()
                .track_index(),
            5
        );
    }

    #[test]
    fn get_or_insert_with_runs_factory_once() {
        let now = Instant::now();
        let mut registry = CarouselRegistry::new();
        let factory = || {
            CarouselEngine::new(CarouselConfig::default(), 5, 1280.0, now)
                .expect("default config is valid")
        };
        registry
            .get_or_insert_with(CarouselKey::Team, factory)
            .advance(rondo_model::Direction::Forward, now);
        let engine = registry.get_or_insert_with(CarouselKey::Team, factory);
        assert_eq!(engine.track_index(), 7);
    }

    #[test]
    fn remove_drops_the_engine() {
        let now = Instant::now();
        let mut registry = CarouselRegistry::new();
        registry
            .ensure(
                CarouselKey::Custom("hero"),
                CarouselConfig::default(),
                5,
                1280.0,
                now,
            )
            .unwrap();
        assert!(registry.remove(&CarouselKey::Custom("hero")).is_some());
        assert!(registry.get(&CarouselKey::Custom("hero")).is_none());
        assert!(registry.remove(&CarouselKey::Custom("hero")).is_none());
    }
}
