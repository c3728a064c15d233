//! Drawing surface abstraction.
//!
//! The field only ever needs two operations from a backend: wipe the whole
//! surface and fill a circle. Browser canvases, the native wgpu batch, and
//! the test recorder all implement [`DrawSurface`].

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::particle::SurfaceSize;
use crate::theme::Rgba;

/// Immediate-mode 2D target.
pub trait DrawSurface {
    /// Clear the full `size` extent.
    fn clear(&mut self, size: SurfaceSize);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// One filled circle, laid out for use as a GPU instance.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Collects circles for a single instanced draw.
///
/// `clear` drops the previous frame's circles; the native renderer uploads
/// [`CircleBatch::instances`] after each tick.
#[derive(Debug, Default)]
pub struct CircleBatch {
    instances: Vec<CircleInstance>,
}

impl CircleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl DrawSurface for CircleBatch {
    fn clear(&mut self, _size: SurfaceSize) {
        self.instances.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.instances.push(CircleInstance {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color: color.to_array(),
        });
    }
}

/// A circle as seen by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Surface that remembers every call. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: Vec<SurfaceSize>,
    pub circles: Vec<RecordedCircle>,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.clears.push(size);
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(RecordedCircle { center, radius, color });
    }
}
