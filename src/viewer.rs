//! Native desktop viewer.
//!
//! Hosts a [`ParticleField`] in a winit window: pointer moves repel dots, the
//! mouse wheel drives a virtual page scroll, resizing rebuilds the field,
//! `T` toggles the theme and `Escape` quits.

use std::cell::Cell;
use std::sync::Arc;

use rand::rngs::SmallRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::FieldConfig;
use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::input::{HostEvent, Input};
use crate::particle::SurfaceSize;
use crate::spawn::time_seeded_rng;
use crate::surface::CircleBatch;
use crate::theme::Theme;
use crate::time::FrameClock;

const TITLE: &str = "dotfield";

/// Open a window and animate the field until it is closed.
pub fn run(config: FieldConfig) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: ParticleField,
    batch: CircleBatch,
    input: Input,
    theme: Cell<Theme>,
    rng: SmallRng,
    clock: FrameClock,
    error: Option<ViewerError>,
}

impl App {
    fn new(config: FieldConfig) -> Self {
        let theme = Cell::new(config.initial_theme);
        Self {
            window: None,
            gpu_state: None,
            field: ParticleField::new(config),
            batch: CircleBatch::new(),
            input: Input::new(),
            theme,
            rng: time_seeded_rng(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let config = self.field.config();
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;

        let size = window.inner_size();
        self.field.configure_surface(
            SurfaceSize::new(size.width as f32, size.height as f32),
            &mut self.rng,
        );
        log::info!(
            "viewer started at {}x{} with {} particles ({} theme)",
            size.width,
            size.height,
            self.field.len(),
            self.theme.get()
        );

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.field.tick(&mut self.batch, &self.theme);

        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state.upload(&self.batch);
            let background = self.field.config().background_for(self.theme.get());
            match gpu_state.render(background) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu_state.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, closing viewer");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if self.clock.tick() {
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} - {} particles - {:.0} fps",
                    TITLE,
                    self.field.len(),
                    self.clock.fps()
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                log::error!("failed to start viewer: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(host_event) = self.input.handle_event(&event) {
            if let (HostEvent::Resized(_), WindowEvent::Resized(size)) = (&host_event, &event) {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(*size);
                }
            }
            host_event.apply(&mut self.field, &self.theme, &mut self.rng);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
