//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod chain;
pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use chain::{Chain, Segment};
pub use collision::{Proximity, head_bites_pointer, heads_collide};
pub use particles::{Particle, ParticleSystem};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
