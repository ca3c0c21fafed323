//! Proximity tests
//!
//! Everything here is a strict `<` against a radius, so touching exactly at
//! the radius does not count.

use glam::Vec2;

use super::chain::Chain;

/// Result of a proximity query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    /// Whether the points are closer than the radius
    pub hit: bool,
    /// Euclidean distance between the points
    pub distance: f32,
}

impl Proximity {
    pub fn between(a: Vec2, b: Vec2, radius: f32) -> Self {
        let distance = a.distance(b);
        Self {
            hit: distance < radius,
            distance,
        }
    }
}

/// Is the player head close enough to the pointer to bite?
pub fn head_bites_pointer(head: Vec2, pointer: Vec2, bite_radius: f32) -> Proximity {
    Proximity::between(head, pointer, bite_radius)
}

/// Head-to-head catch check. Bodies are never tested.
pub fn heads_collide(player: &Chain, enemy: &Chain, catch_radius: f32) -> Proximity {
    Proximity::between(player.head(), enemy.head(), catch_radius)
}
