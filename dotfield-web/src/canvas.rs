//! Browser implementations of the field's host traits.

use std::f64::consts::TAU;

use dotfield::{DrawSurface, RandomSource, Rgba, SurfaceSize, Theme, ThemeSource, Vec2};
use web_sys::{CanvasRenderingContext2d, HtmlElement};

use crate::chrome::LIGHT_MODE_CLASS;

/// 2D canvas context as a [`DrawSurface`].
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    // Skip re-formatting the fill style when consecutive dots share a color
    fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, fill: None }
    }

    /// Forget cached context state. Setting the canvas size resets the
    /// context, so call this after every resize.
    pub fn invalidate(&mut self) {
        self.fill = None;
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}

/// Theme flag backed by the `light-mode` class on `<body>`.
///
/// Reads the live class list on every query.
pub struct BodyTheme {
    body: HtmlElement,
}

impl BodyTheme {
    pub fn new(body: HtmlElement) -> Self {
        Self { body }
    }
}

impl ThemeSource for BodyTheme {
    fn current(&self) -> Theme {
        if self.body.class_list().contains(LIGHT_MODE_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

/// `Math.random()` as a [`RandomSource`].
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f32 {
        let value = js_sys::Math::random() as f32;
        // Narrowing can round values just below 1.0 up to 1.0
        if value < 1.0 {
            value
        } else {
            f32::from_bits(1.0f32.to_bits() - 1)
        }
    }
}
