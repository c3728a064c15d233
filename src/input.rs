//! Host input for the particle field.
//!
//! The native viewer goes through [`Input`], which turns winit window events
//! into [`HostEvent`]s and turns the mouse wheel into a virtual page scroll
//! offset. The browser build reads the real page scroll and calls the
//! [`ParticleField`] setters from its DOM listeners directly.

use std::cell::Cell;

use glam::Vec2;

use crate::field::ParticleField;
use crate::particle::SurfaceSize;
use crate::spawn::RandomSource;
use crate::theme::Theme;

/// Input notification understood by the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to this surface position.
    PointerMoved(Vec2),
    /// Page is now scrolled this far from the top.
    Scrolled(f32),
    /// Drawing surface changed size. Rebuilds the field.
    Resized(SurfaceSize),
    /// Flip between light and dark.
    ToggleTheme,
}

impl HostEvent {
    /// Apply this event to the field and the shared theme flag.
    pub fn apply(self, field: &mut ParticleField, theme: &Cell<Theme>, rng: &mut dyn RandomSource) {
        match self {
            HostEvent::PointerMoved(position) => field.set_pointer(position),
            HostEvent::Scrolled(offset) => field.set_scroll_offset(offset),
            HostEvent::Resized(size) => field.configure_surface(size, rng),
            HostEvent::ToggleTheme => {
                let next = theme.get().toggled();
                theme.set(next);
                log::info!("theme switched to {}", next);
            }
        }
    }
}

/// Pixels scrolled per wheel "line".
pub const LINE_HEIGHT: f32 = 40.0;

/// Native input state: accumulated wheel scroll.
#[derive(Debug, Default)]
pub struct Input {
    scroll_offset: f32,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual page scroll offset in pixels, never negative.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll by a wheel delta in pixels. Positive `dy` means wheel up,
    /// which moves the page back toward the top.
    pub fn scroll_pixels(&mut self, dy: f32) -> HostEvent {
        self.scroll_offset = (self.scroll_offset - dy).max(0.0);
        HostEvent::Scrolled(self.scroll_offset)
    }

    /// Translate a winit window event.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> Option<HostEvent> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::{KeyCode, PhysicalKey};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(HostEvent::PointerMoved(Vec2::new(position.x as f32, position.y as f32)))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                Some(self.scroll_pixels(dy))
            }
            WindowEvent::Resized(size) => Some(HostEvent::Resized(SurfaceSize::new(
                size.width as f32,
                size.height as f32,
            ))),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyT) =>
            {
                Some(HostEvent::ToggleTheme)
            }
            _ => None,
        }
    }
}
