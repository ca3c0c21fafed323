//! Canvas2D backend
//!
//! Executes a draw list on a `CanvasRenderingContext2d`. Nothing is cleared
//! between frames: the translucent wash at the start of every scene is what
//! leaves the trails.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, Paint, build_scene};
use crate::sim::GameState;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport. Resizing clears the canvas.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Draw the current frame for `state`
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw(&build_scene(state))
    }

    pub fn draw(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        let (width, height) = self.size();
        for cmd in cmds {
            match cmd {
                DrawCmd::FillScreen { paint } => {
                    self.ctx.set_fill_style_str(&paint.css());
                    self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCmd::Disc {
                    center,
                    radius,
                    paint,
                } => {
                    self.ctx.set_fill_style_str(&paint.css());
                    self.circle(center.x, center.y, *radius)?;
                }
                DrawCmd::Glow {
                    center,
                    radius,
                    inner,
                } => {
                    let (x, y, r) = (center.x as f64, center.y as f64, *radius as f64);
                    let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
                    gradient.add_color_stop(0.0, &inner.css())?;
                    gradient.add_color_stop(1.0, &Paint::TRANSPARENT.css())?;
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                    self.circle(center.x, center.y, *radius)?;
                }
                DrawCmd::Text {
                    text,
                    center,
                    font,
                    paint,
                } => {
                    self.ctx.set_fill_style_str(&paint.css());
                    self.ctx.set_font(font);
                    self.ctx.set_text_align("center");
                    self.ctx
                        .fill_text(text, center.x as f64, center.y as f64)?;
                }
            }
        }
        Ok(())
    }

    fn circle(&self, x: f32, y: f32, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
