//! Hero background: the particle field on `#hero-canvas`.

use std::cell::RefCell;
use std::rc::Rc;

use dotfield::{FieldConfig, ParticleField, SurfaceSize, Vec2};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::{BodyTheme, CanvasSurface, JsRandom};

const CANVAS_ID: &str = "hero-canvas";

struct Hero {
    canvas: HtmlCanvasElement,
    field: ParticleField,
    surface: CanvasSurface,
    theme: BodyTheme,
    rng: JsRandom,
}

impl Hero {
    /// Match the canvas backing store to its rendered size and rebuild the
    /// field for it.
    fn configure_surface(&mut self) {
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.surface.invalidate();
        self.field
            .configure_surface(SurfaceSize::new(width as f32, height as f32), &mut self.rng);
    }

    fn frame(&mut self) {
        self.field.tick(&mut self.surface, &self.theme);
    }
}

/// Start the particle background if the page has a hero canvas.
pub fn start(window: &Window, document: &Document) -> Result<(), JsValue> {
    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el.dyn_into::<HtmlCanvasElement>()?,
        None => {
            log::debug!("no #{} on this page, particle field disabled", CANVAS_ID);
            return Ok(());
        }
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas context unavailable")?
        .dyn_into()?;
    let body = document.body().ok_or("document has no body")?;

    let hero = Rc::new(RefCell::new(Hero {
        canvas,
        field: ParticleField::new(FieldConfig::default()),
        surface: CanvasSurface::new(ctx),
        theme: BodyTheme::new(body),
        rng: JsRandom,
    }));

    {
        let mut hero = hero.borrow_mut();
        hero.field.set_scroll_offset(window.scroll_y()? as f32);
        hero.configure_surface();
        log::info!("particle field started with {} particles", hero.field.len());
    }

    // Resize rebuilds the whole field
    {
        let hero = hero.clone();
        let closure = Closure::wrap(Box::new(move || {
            hero.borrow_mut().configure_surface();
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let hero = hero.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            hero.borrow_mut().field.set_pointer(pointer);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let hero = hero.clone();
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(offset) = win.scroll_y() {
                hero.borrow_mut().field.set_scroll_offset(offset as f32);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // `f` holds the frame closure so it can re-request itself every frame
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        hero.borrow_mut().frame();

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed, particle field stopped: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }

    Ok(())
}
