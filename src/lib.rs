//! Snake Chase - a neon snake that follows the pointer while an enemy snake hunts it
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (chains, pursuit, collisions, particles, game state)
//! - `renderer`: Scene building and Canvas2D drawing
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Segments per snake
    pub const SEGMENT_COUNT: usize = 90;
    /// Distance between consecutive segments
    pub const SEGMENT_SPACING: f32 = 8.0;
    /// Drawn radius of every body segment
    pub const SEGMENT_RADIUS: f32 = 18.0;

    /// Player head follow rate (fraction of remaining distance per frame)
    pub const PLAYER_SPEED: f32 = 0.02;
    /// Player follow rate while biting at the pointer
    pub const PLAYER_BITE_SPEED: f32 = 0.04;
    /// Enemy head follow rate, always slower than the player baseline
    pub const ENEMY_SPEED: f32 = 0.015;

    /// Pointer distance under which the player "bites"
    pub const BITE_RADIUS: f32 = 20.0;
    /// Head-to-head distance under which the enemy catches the player
    pub const CATCH_RADIUS: f32 = 20.0;

    /// Live particle cap
    pub const MAX_PARTICLES: usize = 60;
    /// Particle lifetime range in frames [min, max)
    pub const PARTICLE_LIFE_MIN: f32 = 20.0;
    pub const PARTICLE_LIFE_MAX: f32 = 50.0;
    /// Lifetime that maps to full opacity
    pub const PARTICLE_LIFE_FULL: f32 = 50.0;
    /// Particle radius range [min, max)
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 5.0;
    /// Max absolute particle velocity per axis
    pub const PARTICLE_MAX_SPEED: f32 = 1.0;

    /// Game over overlay fade per frame
    pub const FADE_STEP: f32 = 0.02;
    /// Real time between a fully faded game over screen and the restart
    pub const RESTART_DELAY_MS: f64 = 2000.0;

    /// Glow clock advance per frame
    pub const GLOW_CLOCK_STEP: f32 = 0.07;
    /// Peak alpha of the player glow
    pub const GLOW_MAX_ALPHA: f32 = 0.25;
    /// Alpha of the per-frame black wash that leaves motion trails
    pub const TRAIL_FADE_ALPHA: f32 = 0.1;

    /// Accent palette re-rolled while biting
    pub const ACCENT_PALETTE: [&str; 6] = [
        "#ff0000", "#00ff00", "#ffff00", "#00ffff", "#ff00ff", "#ffa500",
    ];
    /// Index of the starting accent color (yellow)
    pub const DEFAULT_ACCENT: usize = 2;

    pub const ENEMY_BODY_COLOR: &str = "#ff5555";

    pub const GAME_OVER_TEXT: &str = "GAME OVER!";
    pub const GAME_OVER_FONT: &str = "80px Arial";
}

/// Heading of the vector from `from` to `to`, in radians.
///
/// Coincident points give 0 rather than NaN.
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for an angle
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Parse a `#rrggbb` color into its channels
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_of_coincident_points_is_zero() {
        let p = Vec2::new(12.0, -4.0);
        let a = heading(p, p);
        assert_eq!(a, 0.0);
        assert!(!a.is_nan());
    }

    #[test]
    fn test_heading_quadrants() {
        use std::f32::consts::{FRAC_PI_2, PI};
        assert!((heading(Vec2::ZERO, Vec2::X) - 0.0).abs() < 1e-6);
        assert!((heading(Vec2::ZERO, Vec2::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading(Vec2::ZERO, -Vec2::X) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffa500"), Some((255, 165, 0)));
        assert_eq!(parse_hex_color("ffa500"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        // Six bytes but not six characters
        assert_eq!(parse_hex_color("#a\u{e9}\u{e9}a"), None);
        assert_eq!(parse_hex_color("#+1+1+1"), None);
    }

    #[test]
    fn test_palette_is_well_formed() {
        for color in consts::ACCENT_PALETTE {
            assert!(parse_hex_color(color).is_some(), "bad palette entry {color}");
        }
        assert!(parse_hex_color(consts::ENEMY_BODY_COLOR).is_some());
    }
}
