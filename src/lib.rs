//! # dotfield - ambient particle field
//!
//! A field of small dots for hero sections: each dot is pushed away from the
//! pointer, eases back to its rest position, drifts with page scroll, and
//! wraps vertically. Colors follow the page's light/dark theme.
//!
//! The core is backend-agnostic. Hosts own scheduling and input:
//!
//! - the `dotfield-web` crate binds it to an HTML canvas,
//! - the native viewer ([`viewer`], `cargo run`) renders through wgpu,
//! - tests drive it with a [`RecordingSurface`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use dotfield::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
//! let mut field = ParticleField::new(FieldConfig::default());
//! field.configure_surface(SurfaceSize::new(800.0, 600.0), &mut rng);
//!
//! // On input
//! field.set_pointer(Vec2::new(400.0, 300.0));
//! field.set_scroll_offset(120.0);
//!
//! // Once per display refresh
//! let mut surface = RecordingSurface::default();
//! field.tick(&mut surface, &Theme::Dark);
//! ```
//!
//! ## Per-frame rules
//!
//! | Step | Effect |
//! |------|--------|
//! | Repel | Within 300px of the pointer, pushed away by `(300 - d) / 300 * density` |
//! | Relax | Otherwise, 10% of the remaining offset back toward rest |
//! | Drift | `y += scroll * 0.05 * density / 30` |
//! | Wrap | `y` past the bottom jumps to the top and vice versa |

pub mod config;
pub mod error;
pub mod field;
#[cfg(not(target_arch = "wasm32"))]
mod gpu;
pub mod input;
pub mod particle;
pub mod shader;
pub mod spawn;
pub mod surface;
pub mod theme;
pub mod time;
#[cfg(not(target_arch = "wasm32"))]
pub mod viewer;

pub use config::FieldConfig;
pub use error::ConfigError;
#[cfg(not(target_arch = "wasm32"))]
pub use error::{GpuError, ViewerError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use input::HostEvent;
pub use particle::{draw_particle, update_particle, FieldContext, Particle, SurfaceSize};
pub use spawn::{RandomSource, SpawnContext};
pub use surface::{CircleBatch, CircleInstance, DrawSurface, RecordingSurface};
pub use theme::{Rgba, Theme, ThemeSource};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use dotfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::field::ParticleField;
    pub use crate::input::HostEvent;
    pub use crate::particle::{draw_particle, update_particle, FieldContext, Particle, SurfaceSize};
    pub use crate::spawn::RandomSource;
    pub use crate::surface::{DrawSurface, RecordingSurface};
    pub use crate::theme::{Rgba, Theme, ThemeSource};
    pub use crate::Vec2;
}
