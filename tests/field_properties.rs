//! Integration tests for the particle field's frame-to-frame behavior.
//!
//! These drive the public API only: configure, feed input, tick, inspect.

use std::cell::Cell;

use dotfield::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn seeded_field(width: f32, height: f32, seed: u64) -> ParticleField {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut field = ParticleField::new(FieldConfig::default());
    field.configure_surface(SurfaceSize::new(width, height), &mut rng);
    field
}

// ============================================================================
// Wraparound
// ============================================================================

#[test]
fn test_y_stays_in_bounds_while_scrolling_down() {
    let mut field = seeded_field(800.0, 600.0, 11);
    field.set_scroll_offset(2500.0);
    field.set_pointer(Vec2::new(400.0, 300.0));

    for _ in 0..500 {
        field.step();
        for p in field.particles() {
            assert!(p.position.y >= 0.0, "y below zero: {}", p.position.y);
            assert!(p.position.y < 600.0, "y past bottom: {}", p.position.y);
            assert!(p.position.is_finite());
        }
    }
}

#[test]
fn test_y_stays_in_bounds_with_negative_scroll() {
    let mut field = seeded_field(640.0, 480.0, 12);
    field.set_scroll_offset(-900.0);

    for _ in 0..300 {
        field.step();
        assert!(field
            .particles()
            .iter()
            .all(|p| p.position.y >= 0.0 && p.position.y < 480.0));
    }
}

#[test]
fn test_pointer_sweep_keeps_bounds() {
    let mut field = seeded_field(800.0, 600.0, 13);
    for i in 0..400 {
        let t = i as f32 / 400.0;
        field.set_pointer(Vec2::new(t * 800.0, 600.0 - t * 600.0));
        field.step();
    }
    for p in field.particles() {
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.position.is_finite());
    }
}

// ============================================================================
// Relaxation
// ============================================================================

#[test]
fn test_unset_pointer_relaxes_monotonically() {
    let mut field = seeded_field(800.0, 600.0, 21);

    // Knock every particle off its rest position while staying on-surface
    for p in field.particles_mut() {
        p.position.x = p.base.x + 40.0;
        p.position.y = (p.base.y - 30.0).max(0.0);
    }

    let mut previous: Vec<f32> = field
        .particles()
        .iter()
        .map(|p| p.position.distance(p.base))
        .collect();

    for _ in 0..30 {
        field.step();
        for (p, prev) in field.particles().iter().zip(previous.iter_mut()) {
            let dx_before_sign = p.position.x - p.base.x;
            let dist = p.position.distance(p.base);
            if *prev > 0.0 {
                assert!(dist < *prev, "distance grew from {} to {}", prev, dist);
            }
            // Never crosses to the other side of the rest position
            assert!(dx_before_sign >= 0.0);
            *prev = dist;
        }
    }
}

#[test]
fn test_far_pointer_relaxes_like_unset() {
    let mut far = seeded_field(800.0, 600.0, 22);
    let mut unset = far.clone();

    for field in [&mut far, &mut unset] {
        for p in field.particles_mut() {
            p.position.x = p.base.x - 25.0;
        }
    }

    // Every point of an 800x600 surface is within 1000 of the origin, so
    // put the pointer well outside
    far.set_pointer(Vec2::new(-5000.0, -5000.0));
    far.step();
    unset.step();

    for (a, b) in far.particles().iter().zip(unset.particles()) {
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn test_relaxation_is_asymptotic() {
    let mut field = seeded_field(800.0, 600.0, 23);
    field.particles_mut()[0].position.x += 100.0;

    for _ in 0..50 {
        field.step();
    }
    let p = field.particles()[0];
    assert!(p.position.x > p.base.x);
    assert!(p.position.x - p.base.x < 1.0);
}

// ============================================================================
// Pointer guard
// ============================================================================

#[test]
fn test_pointer_on_particle_produces_no_nan() {
    let mut field = seeded_field(800.0, 600.0, 31);
    let target = field.particles()[3].position;
    field.set_pointer(target);
    field.step();

    let p = field.particles()[3];
    assert!(p.position.x.is_finite());
    assert!(p.position.y.is_finite());
    assert!(field.particles().iter().all(|p| p.position.is_finite()));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_replaces_collection() {
    let mut rng = SmallRng::seed_from_u64(41);
    let mut field = ParticleField::new(FieldConfig::default());

    field.configure_surface(SurfaceSize::new(400.0, 300.0), &mut rng);
    assert_eq!(field.len(), 15);
    let old_bases: Vec<Vec2> = field.particles().iter().map(|p| p.base).collect();

    field.configure_surface(SurfaceSize::new(800.0, 600.0), &mut rng);
    assert_eq!(field.len(), 60);
    assert_eq!(field.surface_size(), SurfaceSize::new(800.0, 600.0));

    let new_bases: Vec<Vec2> = field.particles().iter().map(|p| p.base).collect();
    assert!(old_bases.iter().zip(&new_bases).any(|(a, b)| a != b));
}

#[test]
fn test_resize_keeps_pointer_and_scroll() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut field = ParticleField::new(FieldConfig::default());
    field.set_pointer(Vec2::new(10.0, 20.0));
    field.set_scroll_offset(75.0);
    field.configure_surface(SurfaceSize::new(200.0, 200.0), &mut rng);

    assert_eq!(field.context().pointer, Some(Vec2::new(10.0, 20.0)));
    assert_eq!(field.context().scroll_offset, 75.0);
}

/// Always returns the largest draw a uniform `[0, 1)` source can produce.
struct TopDraw;

impl RandomSource for TopDraw {
    fn next_unit(&mut self) -> f32 {
        f32::from_bits(1.0f32.to_bits() - 1)
    }
}

#[test]
fn test_spawn_with_top_draw_respects_upper_bounds() {
    let mut field = ParticleField::new(FieldConfig::default());
    field.configure_surface(SurfaceSize::new(400.0, 300.0), &mut TopDraw);
    assert_eq!(field.len(), 15);

    for p in field.particles() {
        assert!(p.radius >= 1.0 && p.radius < 3.0, "radius {}", p.radius);
        assert!(p.density >= 1.0 && p.density < 31.0, "density {}", p.density);
        assert!(p.position.x < 400.0 && p.position.y < 300.0);
    }
}

// ============================================================================
// Scroll drift
// ============================================================================

#[test]
fn test_scroll_drift_of_dense_particle() {
    let config = FieldConfig::default();
    let mut p = Particle::new(Vec2::new(100.0, 10.0), 2.0, 30.0);
    let ctx = FieldContext {
        pointer: None,
        scroll_offset: 1000.0,
        surface: SurfaceSize::new(800.0, 600.0),
    };

    update_particle(&mut p, &ctx, &config);
    // relax is a no-op at rest, so the whole change is drift
    assert!((p.position.y - 60.0).abs() < 1e-4);
}

// ============================================================================
// Theme
// ============================================================================

/// Flips the theme after every read.
struct FlippingTheme(Cell<Theme>);

impl ThemeSource for FlippingTheme {
    fn current(&self) -> Theme {
        let theme = self.0.get();
        self.0.set(theme.toggled());
        theme
    }
}

#[test]
fn test_theme_is_read_per_draw_call() {
    let mut field = seeded_field(400.0, 300.0, 51);
    let config = field.config().clone();
    let theme = FlippingTheme(Cell::new(Theme::Light));
    let mut surface = RecordingSurface::default();

    field.tick(&mut surface, &theme);

    assert!(surface.circles.len() >= 2);
    for (i, circle) in surface.circles.iter().enumerate() {
        let expected = if i % 2 == 0 { config.light_fill } else { config.dark_fill };
        assert_eq!(circle.color, expected);
    }
}

#[test]
fn test_theme_change_between_frames() {
    let mut field = seeded_field(400.0, 300.0, 52);
    let theme = Cell::new(Theme::Dark);
    let mut surface = RecordingSurface::default();

    field.tick(&mut surface, &theme);
    assert!(surface.circles.iter().all(|c| c.color == field.config().dark_fill));

    theme.set(Theme::Light);
    field.tick(&mut surface, &theme);
    assert!(surface.circles.iter().all(|c| c.color == field.config().light_fill));
}
