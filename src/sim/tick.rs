//! Per-frame simulation step
//!
//! One call per rendered frame. Rates and fades are per frame; only the
//! restart delay is measured in real time.

use glam::Vec2;

use super::collision::{head_bites_pointer, heads_collide};
use super::state::{GamePhase, GameState};
use crate::consts::GLOW_CLOCK_STEP;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position (last write wins)
    pub pointer: Vec2,
    /// Real time since the previous frame (ms)
    pub dt_ms: f64,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;
    state.pointer = input.pointer;
    state.glow_clock += GLOW_CLOCK_STEP;

    // Sparks drawn last frame age before this frame's spark joins them
    state.particles.update();
    state.spawn_pointer_particle();
    let cap = state.tuning.max_particles;
    state.particles.enforce_cap(cap);

    match state.phase {
        GamePhase::Playing => {
            step_snakes(state);

            let catch = heads_collide(&state.player, &state.enemy, state.tuning.catch_radius);
            if catch.hit {
                log::info!(
                    "Caught at frame {} (heads {:.1} apart), round {} over",
                    state.frame,
                    catch.distance,
                    state.rounds
                );
                state.mouth_open = false;
                state.phase = GamePhase::GameOverAnimating {
                    fade: 0.0,
                    held_ms: 0.0,
                };
            }
        }
        GamePhase::GameOverAnimating { fade, held_ms } => {
            state.mouth_open = false;
            if fade < 1.0 {
                state.phase = GamePhase::GameOverAnimating {
                    fade: (fade + state.tuning.fade_step).min(1.0),
                    held_ms,
                };
            } else {
                let held_ms = held_ms + input.dt_ms.max(0.0);
                if held_ms >= state.tuning.restart_delay_ms {
                    state.reset_round();
                    log::info!("Round {} started", state.rounds);
                } else {
                    state.phase = GamePhase::GameOverAnimating { fade, held_ms };
                }
            }
        }
    }
}

/// Player follows the pointer (biting when close), enemy follows the player
fn step_snakes(state: &mut GameState) {
    let pointer = state.pointer;
    state.player.step_toward(pointer, state.player_speed);

    let bite = head_bites_pointer(state.player.head(), pointer, state.tuning.bite_radius);
    if bite.hit {
        state.reroll_accent();
        state.player_speed = state.tuning.player_bite_speed;
        state.mouth_open = true;
    } else {
        state.player_speed = state.tuning.player_speed;
        state.mouth_open = false;
    }

    let target = state.player.head();
    state.enemy.step_toward(target, state.tuning.enemy_speed);
}
