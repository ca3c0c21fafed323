//! Backend-independent draw lists
//!
//! [`build_scene`] turns a [`GameState`] into an ordered list of primitive
//! draw commands. It only reads state, so the whole frame can be checked in
//! tests without a canvas.

use glam::Vec2;

use crate::consts::*;
use crate::parse_hex_color;
use crate::sim::{GamePhase, GameState};

/// A fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Fully saturated, half lightness
    Hue { hue: f32, a: f32 },
}

impl Paint {
    pub const TRANSPARENT: Paint = Paint::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Paint::Rgba { r, g, b, a }
    }

    /// `#rrggbb` with an alpha; malformed input falls back to white
    pub fn hex(hex: &str, a: f32) -> Self {
        let (r, g, b) = parse_hex_color(hex).unwrap_or((255, 255, 255));
        Paint::Rgba { r, g, b, a }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        match *self {
            Paint::Rgba { r, g, b, a } => format!("rgba({r},{g},{b},{a})"),
            Paint::Hue { hue, a } => format!("hsla({hue},100%,50%,{a})"),
        }
    }
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Rectangle over the whole surface
    FillScreen { paint: Paint },
    /// Solid circle
    Disc {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    /// Radial gradient from `inner` at the center to transparent at `radius`
    Glow {
        center: Vec2,
        radius: f32,
        inner: Paint,
    },
    /// Centered text
    Text {
        text: &'static str,
        center: Vec2,
        font: &'static str,
        paint: Paint,
    },
}

/// Alpha of the player glow at a given glow clock value
pub fn glow_alpha(clock: f32) -> f32 {
    GLOW_MAX_ALPHA * (clock.sin() * 0.5 + 0.5)
}

/// Build the full frame for `state`
pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(
        1 + state.player.len() + state.enemy.len() + state.particles.len() + 2,
    );

    // Translucent wash leaves fading trails of previous frames
    cmds.push(DrawCmd::FillScreen {
        paint: Paint::rgba(0, 0, 0, TRAIL_FADE_ALPHA),
    });

    match state.phase {
        GamePhase::Playing => {
            push_player(&mut cmds, state);
            push_enemy(&mut cmds, state);
        }
        GamePhase::GameOverAnimating { fade, .. } => {
            cmds.push(DrawCmd::FillScreen {
                paint: Paint::rgba(255, 0, 0, fade),
            });
            if fade >= 1.0 {
                cmds.push(DrawCmd::Text {
                    text: GAME_OVER_TEXT,
                    center: state.viewport / 2.0,
                    font: GAME_OVER_FONT,
                    paint: Paint::rgba(255, 255, 255, 1.0),
                });
            }
        }
    }

    for particle in state.particles.iter() {
        cmds.push(DrawCmd::Disc {
            center: particle.pos,
            radius: particle.size,
            paint: Paint::Hue {
                hue: particle.hue,
                a: particle.opacity().clamp(0.0, 1.0),
            },
        });
    }

    cmds
}

fn push_player(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    let inner = Paint::hex(state.accent_color(), glow_alpha(state.glow_clock));
    for (i, seg) in state.player.segments().iter().enumerate() {
        // Open mouth flares the head
        let radius = if i == 0 && state.mouth_open {
            SEGMENT_RADIUS * 1.25
        } else {
            SEGMENT_RADIUS
        };
        cmds.push(DrawCmd::Glow {
            center: seg.pos,
            radius,
            inner,
        });
    }
}

fn push_enemy(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    let paint = Paint::hex(ENEMY_BODY_COLOR, 1.0);
    for seg in state.enemy.segments() {
        cmds.push(DrawCmd::Disc {
            center: seg.pos,
            radius: SEGMENT_RADIUS,
            paint,
        });
    }
}
