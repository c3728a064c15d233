//! Particle record and the per-particle physics/draw steps.
//!
//! A [`Particle`] is plain data. The two free functions in this module do all
//! the work:
//!
//! - [`update_particle`] applies pointer repulsion (or relaxation toward the
//!   rest position), scroll drift, and vertical wraparound.
//! - [`draw_particle`] emits one filled circle, colored from the live theme.
//!
//! Both take their environment explicitly through [`FieldContext`], so they
//! can be driven deterministically in tests without a rendering backend.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::spawn::{next_below, SpawnContext};
use crate::surface::DrawSurface;
use crate::theme::ThemeSource;

/// A single ambient dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in surface pixels.
    pub position: Vec2,
    /// Rest position. Never changes after creation.
    pub base: Vec2,
    /// Draw radius in pixels.
    pub radius: f32,
    /// Displacement and drift multiplier.
    pub density: f32,
}

impl Particle {
    /// Create a particle at rest at `position`.
    pub fn new(position: Vec2, radius: f32, density: f32) -> Self {
        Self {
            position,
            base: position,
            radius,
            density,
        }
    }

    /// Draw a fresh particle anywhere inside the current surface.
    ///
    /// Position, radius and density are independent uniform draws.
    pub fn spawn(ctx: &mut SpawnContext<'_>, config: &FieldConfig) -> Self {
        let position = ctx.random_in_surface();
        let radius = ctx.random_range(config.radius_range[0], config.radius_range[1]);
        let density = ctx.random_range(config.density_range[0], config.density_range[1]);
        Self::new(position, radius, density)
    }
}

/// Surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface area in square pixels.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Everything outside a particle that influences its next step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldContext {
    /// Last known pointer position. `None` until the first pointer move.
    pub pointer: Option<Vec2>,
    /// Last known vertical page scroll offset.
    pub scroll_offset: f32,
    /// Current drawing surface size.
    pub surface: SurfaceSize,
}

/// Advance a particle by one frame.
pub fn update_particle(p: &mut Particle, ctx: &FieldContext, config: &FieldConfig) {
    match repulsion(p, ctx.pointer, config) {
        Some(push) => p.position -= push,
        None => relax(p, config.relax_divisor),
    }

    p.position.y += ctx.scroll_offset * config.scroll_factor * (p.density / config.density_reference);

    p.position.y = wrap_vertical(p.position.y, ctx.surface.height);
}

/// Displacement away from the pointer, or `None` when the pointer has no
/// influence on this particle.
///
/// An unset pointer, a zero distance, and a non-finite distance all count as
/// "no influence" so the direction vector is never computed from a zero
/// length.
fn repulsion(p: &Particle, pointer: Option<Vec2>, config: &FieldConfig) -> Option<Vec2> {
    let pointer = pointer?;
    let delta = pointer - p.position;
    let distance = delta.length();

    if !distance.is_finite() || distance <= 0.0 || distance >= config.max_influence_radius {
        return None;
    }

    let direction = delta / distance;
    let force = (config.max_influence_radius - distance) / config.max_influence_radius;
    Some(direction * force * p.density)
}

/// Ease toward the rest position by a fixed fraction of the remaining offset.
///
/// Asymptotic: the offset shrinks every frame but is never snapped to zero.
fn relax(p: &mut Particle, divisor: f32) {
    if p.position.x != p.base.x {
        p.position.x -= (p.position.x - p.base.x) / divisor;
    }
    if p.position.y != p.base.y {
        p.position.y -= (p.position.y - p.base.y) / divisor;
    }
}

/// Keep `y` inside `[0, height)`.
///
/// Past the bottom edge jumps to the top; above the top jumps to just inside
/// the bottom edge.
pub fn wrap_vertical(y: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    if y >= height {
        0.0
    } else if y < 0.0 {
        next_below(height)
    } else {
        y
    }
}

/// Draw a particle as a filled circle.
///
/// The fill color is read from `theme` on every call.
pub fn draw_particle<S, T>(p: &Particle, surface: &mut S, theme: &T, config: &FieldConfig)
where
    S: DrawSurface + ?Sized,
    T: ThemeSource + ?Sized,
{
    let color = config.fill_for(theme.current());
    surface.fill_circle(p.position, p.radius, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::theme::Theme;

    fn ctx(pointer: Option<Vec2>, scroll: f32) -> FieldContext {
        FieldContext {
            pointer,
            scroll_offset: scroll,
            surface: SurfaceSize::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_pointer_pushes_particle_away() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), 2.0, 10.0);
        update_particle(&mut p, &ctx(Some(Vec2::new(150.0, 100.0)), 0.0), &config);

        // distance 50 -> force (300 - 50) / 300, pushed left
        let expected = 100.0 - (250.0 / 300.0) * 10.0;
        assert!((p.position.x - expected).abs() < 1e-4);
        assert!((p.position.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_on_particle_stays_finite() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(200.0, 200.0), 2.0, 25.0);
        update_particle(&mut p, &ctx(Some(Vec2::new(200.0, 200.0)), 0.0), &config);

        assert!(p.position.is_finite());
        assert_eq!(p.position, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_relax_moves_tenth_of_offset() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), 2.0, 10.0);
        p.position = Vec2::new(120.0, 90.0);
        update_particle(&mut p, &ctx(None, 0.0), &config);

        assert!((p.position.x - 118.0).abs() < 1e-4);
        assert!((p.position.y - 91.0).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_drift_scales_with_density() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(10.0, 100.0), 2.0, 30.0);
        update_particle(&mut p, &ctx(None, 1000.0), &config);
        assert!((p.position.y - 150.0).abs() < 1e-3);

        let mut half = Particle::new(Vec2::new(10.0, 100.0), 2.0, 15.0);
        update_particle(&mut half, &ctx(None, 1000.0), &config);
        assert!((half.position.y - 125.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_vertical() {
        assert_eq!(wrap_vertical(601.0, 600.0), 0.0);
        assert_eq!(wrap_vertical(600.0, 600.0), 0.0);
        assert_eq!(wrap_vertical(300.0, 600.0), 300.0);

        let wrapped = wrap_vertical(-0.5, 600.0);
        assert!(wrapped < 600.0);
        assert!(wrapped > 599.9);
    }

    #[test]
    fn test_x_is_not_wrapped() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(-50.0, 100.0), 2.0, 10.0);
        p.base = Vec2::new(-50.0, 100.0);
        update_particle(&mut p, &ctx(None, 0.0), &config);
        assert_eq!(p.position.x, -50.0);
    }

    #[test]
    fn test_draw_uses_theme_fill() {
        let config = FieldConfig::default();
        let p = Particle::new(Vec2::new(5.0, 6.0), 1.5, 3.0);
        let mut surface = RecordingSurface::default();

        draw_particle(&p, &mut surface, &Theme::Light, &config);
        draw_particle(&p, &mut surface, &Theme::Dark, &config);

        assert_eq!(surface.circles.len(), 2);
        assert_eq!(surface.circles[0].color, config.light_fill);
        assert_eq!(surface.circles[1].color, config.dark_fill);
        assert_eq!(surface.circles[0].radius, 1.5);
    }
}
