//! Randomness source for the simulation
//!
//! All random draws go through the [`Randomness`] trait so tests can
//! substitute a scripted source. The production implementation is a
//! lightweight xorshift32 PRNG — no external crate needed.

/// Uniform integer draws over half-open ranges.
pub trait Randomness {
    /// Returns a value in `[min, max)`. Requires `min < max`.
    fn range_i32(&mut self, min: i32, max: i32) -> i32;

    /// Pick a uniformly random element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let idx = self.range_i32(0, items.len() as i32) as usize;
        &items[idx]
    }
}

/// xorshift32 generator
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the system clock, for hosts that just want different
    /// snow each run.
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self::new(nanos ^ 0x9E37_79B9)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Randomness for XorShiftRng {
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min < max);
        let span = (max as i64 - min as i64) as u64;
        min + (u64::from(self.next_u32()) % span) as i32
    }
}
