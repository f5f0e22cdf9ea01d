//! The per-tick simulation step: spawn, advance, cull, request redraw

use crate::config::SnowConfig;
use crate::events::{EventQueue, SimEvent};
use crate::flyweight::{DescriptorCache, Shape};
use crate::particle::{Flake, FlakeList};
use crate::rng::Randomness;
use flurry_core::Viewport;

/// The snowfall state: descriptor cache plus the live-flake list.
///
/// Single-threaded by construction — a tick runs to completion before
/// anything can observe the list, and rendering only ever borrows it.
pub struct SnowSimulation {
    config: SnowConfig,
    cache: DescriptorCache,
    flakes: FlakeList,
}

impl SnowSimulation {
    pub fn new(config: SnowConfig) -> Self {
        Self {
            config,
            cache: DescriptorCache::new(),
            flakes: FlakeList::new(),
        }
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    /// The live flakes exactly as the last tick left them
    pub fn flakes(&self) -> &[Flake] {
        self.flakes.as_slice()
    }

    /// Advance the simulation by one discrete step.
    ///
    /// The viewport is read fresh on every call so window resizes take
    /// effect immediately. Phases run in a fixed order: spawn new
    /// flakes along the top edge, advance every live flake (including
    /// the ones just spawned), cull everything past the bottom, then
    /// signal that a repaint is needed.
    pub fn tick<R: Randomness>(&mut self, viewport: Viewport, rng: &mut R, events: &mut EventQueue) {
        // Spawn
        let spawned = self.config.spawn_per_tick;
        for _ in 0..spawned {
            let color = *rng.pick(&self.config.palette);
            let size = rng.range_i32(self.config.size_min as i32, self.config.size_max as i32) as u32;
            let x = rng.range_i32(0, viewport.width as i32);
            let descriptor = self.cache.get_or_create(Shape::Circle, color, size);
            self.flakes.push(Flake { descriptor, x, y: 0 });
        }

        // Advance
        for flake in self.flakes.as_mut_slice() {
            flake.y += rng.range_i32(self.config.fall_min, self.config.fall_max);
        }

        // Cull
        let culled = self.flakes.cull_below(viewport.height as i32);

        events.push(SimEvent::TickCompleted {
            spawned,
            culled: culled as u32,
            alive: self.flakes.len(),
        });
        events.push(SimEvent::RedrawRequested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShiftRng;
    use flurry_core::Color;
    use std::sync::Arc;

    const VIEWPORT: Viewport = Viewport::new(800, 600);

    /// Answers each draw by its requested range, so every spawned
    /// flake comes out identical: white, size 10, x 100, falling 3.
    struct ScriptedRng;

    impl Randomness for ScriptedRng {
        fn range_i32(&mut self, min: i32, max: i32) -> i32 {
            match (min, max) {
                (0, 4) => 0,     // palette index -> #FFFFFF
                (5, 15) => 10,   // size
                (0, 800) => 100, // spawn x
                (2, 5) => 3,     // fall increment
                _ => min,
            }
        }
    }

    #[test]
    fn first_tick_spawns_five_within_ranges() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut rng = XorShiftRng::new(42);
        let mut events = EventQueue::new();

        sim.tick(VIEWPORT, &mut rng, &mut events);

        assert_eq!(sim.flakes().len(), 5);
        let palette = sim.config().palette.clone();
        for flake in sim.flakes() {
            assert_eq!(flake.descriptor.shape, Shape::Circle);
            assert!(palette.contains(&flake.descriptor.color));
            assert!((5..15).contains(&flake.descriptor.size));
            assert!((0..800).contains(&flake.x));
            // Advance ran in the same tick, so y already moved once
            assert!((2..5).contains(&flake.y));
        }
    }

    #[test]
    fn scripted_scenario_five_identical_flakes_share_one_descriptor() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut events = EventQueue::new();

        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        let flakes = sim.flakes();
        assert_eq!(flakes.len(), 5);
        for flake in flakes {
            assert_eq!(flake.x, 100);
            assert_eq!(flake.y, 3);
            assert_eq!(flake.descriptor.color, Color::WHITE);
            assert_eq!(flake.descriptor.size, 10);
        }
        for flake in &flakes[1..] {
            assert!(Arc::ptr_eq(&flakes[0].descriptor, &flake.descriptor));
        }
        assert_eq!(sim.cache().len(), 1);
    }

    #[test]
    fn tick_signals_redraw_after_state_settles() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut events = EventQueue::new();

        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        let drained = events.drain();
        assert_eq!(
            drained,
            vec![
                SimEvent::TickCompleted {
                    spawned: 5,
                    culled: 0,
                    alive: 5,
                },
                SimEvent::RedrawRequested,
            ]
        );
    }

    #[test]
    fn flake_near_bottom_is_culled_once_it_crosses() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut events = EventQueue::new();
        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        // Park one flake just above the cull line
        sim.flakes.as_mut_slice()[0].y = 598;
        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        // 598 + 3 = 601 > 600, so it is gone; everything else survives
        assert_eq!(sim.flakes().len(), 9);
        assert!(sim.flakes().iter().all(|f| f.y <= 600));
    }

    #[test]
    fn flake_landing_exactly_on_the_line_survives() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut events = EventQueue::new();
        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        sim.flakes.as_mut_slice()[0].y = 597;
        sim.tick(VIEWPORT, &mut ScriptedRng, &mut events);

        // 597 + 3 = 600, on the line, not past it
        assert!(sim.flakes().iter().any(|f| f.y == 600));
        assert_eq!(sim.flakes().len(), 10);
    }

    #[test]
    fn descent_is_strictly_monotonic_for_survivors() {
        // Tall viewport so nothing culls and indices stay stable
        let tall = Viewport::new(800, 1_000_000);
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut rng = XorShiftRng::new(7);
        let mut events = EventQueue::new();

        sim.tick(tall, &mut rng, &mut events);
        let mut last: Vec<i32> = sim.flakes()[..5].iter().map(|f| f.y).collect();

        for _ in 0..20 {
            sim.tick(tall, &mut rng, &mut events);
            let now: Vec<i32> = sim.flakes()[..5].iter().map(|f| f.y).collect();
            for (prev, cur) in last.iter().zip(&now) {
                // Minimum increment is 2, so strictly increasing
                assert!(cur >= &(prev + 2));
            }
            last = now;
        }
    }

    #[test]
    fn descriptor_count_is_bounded_by_combinations() {
        let mut sim = SnowSimulation::new(SnowConfig::default());
        let mut rng = XorShiftRng::new(1234);
        let mut events = EventQueue::new();
        let tall = Viewport::new(800, 1_000_000);

        for _ in 0..100 {
            sim.tick(tall, &mut rng, &mut events);
        }
        // 500 flakes spawned, but at most 4 colors x 10 sizes exist
        assert_eq!(sim.flakes().len(), 500);
        assert!(sim.cache().len() <= 40);
    }
}
