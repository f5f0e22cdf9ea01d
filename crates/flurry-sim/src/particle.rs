//! Flake state and the live-flake list

use crate::flyweight::Descriptor;
use std::sync::Arc;

/// One falling snowflake: a shared appearance descriptor plus its
/// extrinsic position. `x` is fixed at spawn; `y` only ever grows.
pub struct Flake {
    pub descriptor: Arc<Descriptor>,
    pub x: i32,
    pub y: i32,
}

/// Ordered list of live flakes.
///
/// Append keeps insertion order, so iteration within a tick is
/// deterministic. Culling uses swap-remove — survivor order may
/// change between ticks, which rendering does not care about.
#[derive(Default)]
pub struct FlakeList {
    flakes: Vec<Flake>,
}

impl FlakeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flake: Flake) {
        self.flakes.push(flake);
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn as_slice(&self) -> &[Flake] {
        &self.flakes
    }

    pub fn as_mut_slice(&mut self) -> &mut [Flake] {
        &mut self.flakes
    }

    /// Remove every flake that has fallen past `max_y`, returning how
    /// many were removed. O(1) per removal via swap-remove.
    pub fn cull_below(&mut self, max_y: i32) -> usize {
        let before = self.flakes.len();
        let mut i = 0;
        while i < self.flakes.len() {
            if self.flakes[i].y > max_y {
                self.flakes.swap_remove(i);
                // Don't advance — the swapped-in flake needs checking
            } else {
                i += 1;
            }
        }
        before - self.flakes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyweight::{DescriptorCache, Shape};
    use flurry_core::Color;

    fn flake(cache: &mut DescriptorCache, x: i32, y: i32) -> Flake {
        Flake {
            descriptor: cache.get_or_create(Shape::Circle, Color::WHITE, 10),
            x,
            y,
        }
    }

    #[test]
    fn cull_removes_only_flakes_past_the_line() {
        let mut cache = DescriptorCache::new();
        let mut list = FlakeList::new();
        list.push(flake(&mut cache, 0, 599));
        list.push(flake(&mut cache, 1, 601));
        list.push(flake(&mut cache, 2, 600));
        list.push(flake(&mut cache, 3, 700));

        let removed = list.cull_below(600);
        assert_eq!(removed, 2);
        assert_eq!(list.len(), 2);
        // y == max_y is exactly on the line and survives
        assert!(list.as_slice().iter().all(|f| f.y <= 600));
    }

    #[test]
    fn cull_handles_consecutive_removals() {
        let mut cache = DescriptorCache::new();
        let mut list = FlakeList::new();
        // Swapped-in elements must be re-checked, not skipped
        for y in [700, 701, 702, 10] {
            list.push(flake(&mut cache, 0, y));
        }
        assert_eq!(list.cull_below(600), 3);
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].y, 10);
    }

    #[test]
    fn cull_on_empty_list_is_a_no_op() {
        let mut list = FlakeList::new();
        assert_eq!(list.cull_below(600), 0);
    }

    #[test]
    fn push_preserves_order() {
        let mut cache = DescriptorCache::new();
        let mut list = FlakeList::new();
        for x in 0..5 {
            list.push(flake(&mut cache, x, 0));
        }
        let xs: Vec<i32> = list.as_slice().iter().map(|f| f.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }
}
