//! Randomness for particle creation.
//!
//! The host decides where uniform numbers come from: the browser build feeds
//! `Math.random()`, the native viewer and tests use a seeded [`SmallRng`].
//! [`SpawnContext`] wraps either one with the helpers particle creation
//! needs.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::SurfaceSize;

/// Source of uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for SmallRng {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.gen()
    }
}

/// Seeded generator for hosts without their own source.
///
/// The seed mixes in wall-clock time so each run looks different.
pub fn time_seeded_rng() -> SmallRng {
    let seed = web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42);
    SmallRng::seed_from_u64(seed)
}

/// Context handed to particle creation.
pub struct SpawnContext<'a> {
    /// Index of the particle being spawned (0 to count-1).
    pub index: usize,
    /// Total number of particles in this rebuild.
    pub count: usize,
    /// Surface the particle must start inside.
    pub surface: SurfaceSize,
    rng: &'a mut dyn RandomSource,
}

impl<'a> SpawnContext<'a> {
    pub(crate) fn new(
        index: usize,
        count: usize,
        surface: SurfaceSize,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            index,
            count,
            surface,
            rng,
        }
    }

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.next_unit()
    }

    /// Random f32 in `[min, max)`.
    ///
    /// Draws just below 1 can round up to `max` in f32; those are pulled back
    /// inside the range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        let value = min + self.random() * (max - min);
        if value < max {
            value
        } else {
            next_below(max).max(min)
        }
    }

    /// Uniform point over the surface extent.
    pub fn random_in_surface(&mut self) -> Vec2 {
        let x = self.random_range(0.0, self.surface.width);
        let y = self.random_range(0.0, self.surface.height);
        Vec2::new(x, y)
    }
}

/// Largest f32 strictly below `bound`.
pub(crate) fn next_below(bound: f32) -> f32 {
    if bound > 0.0 {
        f32::from_bits(bound.to_bits() - 1)
    } else if bound == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(bound.to_bits() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f32);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_random_range_maps_unit_interval() {
        let mut src = Fixed(0.5);
        let mut ctx = SpawnContext::new(0, 1, SurfaceSize::new(100.0, 50.0), &mut src);
        assert!((ctx.random_range(1.0, 3.0) - 2.0).abs() < 1e-6);

        let mut zero = Fixed(0.0);
        let mut ctx = SpawnContext::new(0, 1, SurfaceSize::new(100.0, 50.0), &mut zero);
        assert_eq!(ctx.random_range(1.0, 31.0), 1.0);
    }

    #[test]
    fn test_top_draw_stays_below_upper_bound() {
        let top = f32::from_bits(1.0f32.to_bits() - 1);
        let mut src = Fixed(top);
        let mut ctx = SpawnContext::new(0, 1, SurfaceSize::new(400.0, 300.0), &mut src);

        assert!(ctx.random_range(1.0, 3.0) < 3.0);
        assert!(ctx.random_range(1.0, 31.0) < 31.0);

        let p = ctx.random_in_surface();
        assert!(p.x < 400.0 && p.y < 300.0);
    }

    #[test]
    fn test_empty_surface_spawns_at_origin() {
        let mut src = Fixed(0.9);
        let mut ctx = SpawnContext::new(0, 1, SurfaceSize::new(0.0, 0.0), &mut src);
        assert_eq!(ctx.random_in_surface(), Vec2::ZERO);
    }

    #[test]
    fn test_next_below() {
        assert!(next_below(3.0) < 3.0);
        assert!(next_below(3.0) > 2.9999);
        assert!(next_below(0.0) < 0.0);
        assert!(next_below(-2.0) < -2.0);
    }

    #[test]
    fn test_random_in_surface_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let surface = SurfaceSize::new(640.0, 480.0);
        let mut ctx = SpawnContext::new(0, 1, surface, &mut rng);
        for _ in 0..200 {
            let p = ctx.random_in_surface();
            assert!(p.x >= 0.0 && p.x < 640.0);
            assert!(p.y >= 0.0 && p.y < 480.0);
        }
    }
}
