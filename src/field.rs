//! The particle field: collection, context, and the single-step frame.
//!
//! [`ParticleField`] owns the particles and the [`FieldContext`] they react
//! to. Hosts feed it input (pointer, scroll, resize) and call
//! [`ParticleField::tick`] once per display refresh. The field never
//! schedules itself.
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldConfig::default());
//! field.configure_surface(SurfaceSize::new(800.0, 600.0), &mut rng);
//! field.set_pointer(Vec2::new(400.0, 300.0));
//! field.tick(&mut surface, &theme);
//! ```

use glam::Vec2;

use crate::config::FieldConfig;
use crate::particle::{draw_particle, update_particle, FieldContext, Particle, SurfaceSize};
use crate::spawn::{RandomSource, SpawnContext};
use crate::surface::DrawSurface;
use crate::theme::ThemeSource;

/// Ambient particle field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    context: FieldContext,
    config: FieldConfig,
    frame: u64,
}

impl ParticleField {
    /// Create an empty field. Call [`configure_surface`](Self::configure_surface)
    /// before the first tick.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            particles: Vec::new(),
            context: FieldContext::default(),
            config,
            frame: 0,
        }
    }

    /// Adopt a new surface size and rebuild every particle.
    ///
    /// The old collection is discarded wholesale; new particles are spread
    /// uniformly over the new extent.
    pub fn configure_surface(&mut self, size: SurfaceSize, rng: &mut dyn RandomSource) {
        self.context.surface = size;
        self.rebuild(rng);
    }

    fn rebuild(&mut self, rng: &mut dyn RandomSource) {
        let surface = self.context.surface;
        let count = self.config.particle_count(surface.width, surface.height);

        let mut particles = Vec::with_capacity(count);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count, surface, &mut *rng);
            particles.push(Particle::spawn(&mut ctx, &self.config));
        }
        self.particles = particles;

        log::debug!(
            "particle field rebuilt: {} particles for {}x{}",
            count,
            surface.width,
            surface.height
        );
    }

    /// Record the latest pointer position.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.context.pointer = Some(position);
    }

    /// Forget the pointer, so no particle is repelled.
    pub fn clear_pointer(&mut self) {
        self.context.pointer = None;
    }

    /// Record the latest vertical scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.context.scroll_offset = offset;
    }

    /// Advance one frame: clear, then draw and update each particle in order.
    ///
    /// Each particle is drawn at the position from the previous tick before
    /// it is moved.
    pub fn tick<S, T>(&mut self, surface: &mut S, theme: &T)
    where
        S: DrawSurface + ?Sized,
        T: ThemeSource + ?Sized,
    {
        surface.clear(self.context.surface);
        for particle in &mut self.particles {
            draw_particle(particle, surface, theme, &self.config);
            update_particle(particle, &self.context, &self.config);
        }
        self.frame += 1;
    }

    /// Advance one frame without drawing.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            update_particle(particle, &self.context, &self.config);
        }
        self.frame += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for hosts that seed hand-placed particles.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn context(&self) -> &FieldContext {
        &self.context
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.context.surface
    }

    /// Number of ticks since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
