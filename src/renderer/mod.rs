//! Rendering module
//!
//! `scene` builds a pure draw list from the game state; `canvas` plays it back
//! on an HTML canvas (wasm only).

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, Paint, build_scene};
