//! Data-driven game balance
//!
//! Every gameplay number the simulation reads comes from a [`Tuning`]. The
//! defaults mirror [`crate::consts`]; a JSON document may override any subset
//! of fields.

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Segments per snake
    pub segment_count: usize,
    /// Distance between consecutive segments
    pub segment_spacing: f32,
    /// Player head follow rate
    pub player_speed: f32,
    /// Player head follow rate while biting
    pub player_bite_speed: f32,
    /// Enemy head follow rate
    pub enemy_speed: f32,
    /// Pointer distance that triggers a bite
    pub bite_radius: f32,
    /// Head-to-head distance that ends the round
    pub catch_radius: f32,
    /// Live particle cap
    pub max_particles: usize,
    /// Game over fade per frame
    pub fade_step: f32,
    /// Delay between full fade and restart (ms)
    pub restart_delay_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            segment_count: SEGMENT_COUNT,
            segment_spacing: SEGMENT_SPACING,
            player_speed: PLAYER_SPEED,
            player_bite_speed: PLAYER_BITE_SPEED,
            enemy_speed: ENEMY_SPEED,
            bite_radius: BITE_RADIUS,
            catch_radius: CATCH_RADIUS,
            max_particles: MAX_PARTICLES,
            fade_step: FADE_STEP,
            restart_delay_ms: RESTART_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value keeps the simulation well-defined
    pub fn validate(&self) -> Result<()> {
        ensure!(self.segment_count >= 1, "segment_count must be at least 1");
        ensure!(
            self.segment_spacing.is_finite() && self.segment_spacing > 0.0,
            "segment_spacing must be positive, got {}",
            self.segment_spacing
        );
        for (name, rate) in [
            ("player_speed", self.player_speed),
            ("player_bite_speed", self.player_bite_speed),
            ("enemy_speed", self.enemy_speed),
        ] {
            if !(rate > 0.0 && rate <= 1.0) {
                bail!("{name} must be in (0, 1], got {rate}");
            }
        }
        ensure!(
            self.enemy_speed < self.player_speed,
            "enemy_speed ({}) must be slower than player_speed ({})",
            self.enemy_speed,
            self.player_speed
        );
        ensure!(
            self.bite_radius >= 0.0 && self.catch_radius >= 0.0,
            "radii must not be negative"
        );
        ensure!(
            self.fade_step > 0.0 && self.fade_step <= 1.0,
            "fade_step must be in (0, 1], got {}",
            self.fade_step
        );
        ensure!(
            self.restart_delay_ms >= 0.0,
            "restart_delay_ms must not be negative"
        );
        Ok(())
    }

    /// Load from an optional JSON source, falling back to defaults on error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    log::debug!("{:?}", tuning);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning overrides: {:#}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json(r#"{ "enemy_speed": 0.01, "segment_count": 12 }"#).unwrap();
        assert_eq!(tuning.segment_count, 12);
        assert!((tuning.enemy_speed - 0.01).abs() < f32::EPSILON);
        assert_eq!(tuning.max_particles, MAX_PARTICLES);
    }

    #[test]
    fn test_rejects_enemy_faster_than_player() {
        let err = Tuning::from_json(r#"{ "enemy_speed": 0.5 }"#).unwrap_err();
        assert!(err.to_string().contains("enemy_speed"));
    }

    #[test]
    fn test_rejects_bad_spacing_and_count() {
        assert!(Tuning::from_json(r#"{ "segment_spacing": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "segment_count": 0 }"#).is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(Tuning::load_or_default(Some("not json")), Tuning::default());
        assert_eq!(Tuning::load_or_default(None), Tuning::default());
    }
}
