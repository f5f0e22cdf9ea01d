//! Flyweight descriptor cache
//!
//! Many flakes look identical; the cache stores one immutable
//! [`Descriptor`] per distinct (shape, color, size) combination and
//! hands out shared handles, so a screen full of snow allocates a
//! handful of appearance objects instead of one per flake.

use flurry_core::Color;
use std::collections::HashMap;
use std::sync::Arc;

/// Closed set of flake shape tags.
///
/// The simulation currently emits only `Circle`; the cache is total
/// over the enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Star,
}

/// Shared immutable appearance data for one or more flakes.
///
/// Never mutated after construction; owned by the cache for the
/// process lifetime and referenced by flakes through `Arc`.
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub shape: Shape,
    pub color: Color,
    /// Diameter in pixels
    pub size: u32,
}

/// Structural composite key — no string formatting involved, so there
/// is nothing to collide on beyond the fields themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct DescriptorKey {
    shape: Shape,
    color: Color,
    size: u32,
}

/// Lazily-populated descriptor store. Never evicts, so every handle a
/// flake holds stays valid for the process lifetime.
#[derive(Default)]
pub struct DescriptorCache {
    descriptors: HashMap<DescriptorKey, Arc<Descriptor>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the single shared descriptor for this combination,
    /// creating it on first request.
    ///
    /// Two calls with equal inputs return the identical instance
    /// (`Arc::ptr_eq`), not merely an equal value.
    pub fn get_or_create(&mut self, shape: Shape, color: Color, size: u32) -> Arc<Descriptor> {
        let key = DescriptorKey { shape, color, size };
        Arc::clone(
            self.descriptors
                .entry(key)
                .or_insert_with(|| Arc::new(Descriptor { shape, color, size })),
        )
    }

    /// Number of distinct descriptors created so far
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_inputs_share_one_instance() {
        let mut cache = DescriptorCache::new();
        let a = cache.get_or_create(Shape::Circle, Color::WHITE, 10);
        let b = cache.get_or_create(Shape::Circle, Color::WHITE, 10);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn differing_inputs_get_distinct_instances() {
        let mut cache = DescriptorCache::new();
        let base = cache.get_or_create(Shape::Circle, Color::WHITE, 10);

        let other_size = cache.get_or_create(Shape::Circle, Color::WHITE, 11);
        assert!(!Arc::ptr_eq(&base, &other_size));

        let other_color = cache.get_or_create(Shape::Circle, Color::AZURE, 10);
        assert!(!Arc::ptr_eq(&base, &other_color));

        let other_shape = cache.get_or_create(Shape::Star, Color::WHITE, 10);
        assert!(!Arc::ptr_eq(&base, &other_shape));

        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn handles_outlive_later_insertions() {
        let mut cache = DescriptorCache::new();
        let first = cache.get_or_create(Shape::Circle, Color::WHITE, 5);
        for size in 6..20 {
            cache.get_or_create(Shape::Circle, Color::WHITE, size);
        }
        let again = cache.get_or_create(Shape::Circle, Color::WHITE, 5);
        assert!(Arc::ptr_eq(&first, &again));
    }
}
