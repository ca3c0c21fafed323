//! Decorative pointer particles
//!
//! Purely visual: nothing in the simulation reads them back.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A short-lived spark
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: f32,
    /// HSL hue in degrees, drawn at full saturation
    pub hue: f32,
    pub size: f32,
}

impl Particle {
    /// Random spark at `pos`
    pub fn random<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            ),
            life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            hue: rng.random_range(0.0..360.0),
            size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
        }
    }

    /// Draw opacity; reaches zero or below on the frame the particle dies
    pub fn opacity(&self) -> f32 {
        self.life / PARTICLE_LIFE_FULL
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= 1.0;
    }
}

/// Bounded, insertion-ordered particle pool (oldest first)
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<R: Rng>(&mut self, pos: Vec2, rng: &mut R) {
        self.push(Particle::random(pos, rng));
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Age every particle one frame and drop the dead.
    ///
    /// Runs after the particles were drawn at their current opacity, so a
    /// spark is shown at its spawn point first and never at zero.
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| {
            p.advance();
            p.is_alive()
        });
    }

    /// Evict the oldest until at most `cap` remain
    pub fn enforce_cap(&mut self, cap: usize) {
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spark(life: f32) -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -0.5),
            life,
            hue: 0.0,
            size: 3.0,
        }
    }

    #[test]
    fn test_random_particle_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Particle::random(Vec2::new(5.0, 6.0), &mut rng);
            assert_eq!(p.pos, Vec2::new(5.0, 6.0));
            assert!((-1.0..=1.0).contains(&p.vel.x));
            assert!((-1.0..=1.0).contains(&p.vel.y));
            assert!((20.0..50.0).contains(&p.life));
            assert!((0.0..360.0).contains(&p.hue));
            assert!((2.0..5.0).contains(&p.size));
        }
    }

    #[test]
    fn test_particle_dies_within_fifty_frames() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = ParticleSystem::new();
        system.spawn(Vec2::new(10.0, 10.0), &mut rng);
        for _ in 0..50 {
            system.update();
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut system = ParticleSystem::new();
        system.push(spark(10.0));
        system.update();
        let p = system.iter().next().unwrap();
        assert_eq!(p.pos, Vec2::new(1.0, -0.5));
        assert_eq!(p.life, 9.0);
    }

    #[test]
    fn test_removed_exactly_when_opacity_hits_zero() {
        let mut system = ParticleSystem::new();
        system.push(spark(3.0));
        system.update();
        system.update();
        let last = system.iter().next().unwrap();
        assert!(last.opacity() > 0.0);
        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut system = ParticleSystem::new();
        for i in 0..65 {
            let mut p = spark(40.0);
            p.hue = i as f32;
            system.push(p);
        }
        system.update();
        system.enforce_cap(60);
        assert_eq!(system.len(), 60);
        // First five (oldest) are gone, newest survive
        assert_eq!(system.iter().next().unwrap().hue, 5.0);
        assert_eq!(system.iter().last().unwrap().hue, 64.0);
    }

    #[test]
    fn test_cap_keeps_newest_spawn() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut system = ParticleSystem::new();
        for _ in 0..60 {
            system.push(spark(40.0));
        }
        system.spawn(Vec2::new(7.0, 8.0), &mut rng);
        system.enforce_cap(60);
        assert_eq!(system.len(), 60);
        assert_eq!(system.iter().last().unwrap().pos, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_update_on_empty_is_noop() {
        let mut system = ParticleSystem::new();
        system.update();
        assert!(system.is_empty());
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_cap(seed in any::<u64>(), frames in 1usize..300, cap in 0usize..80) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut system = ParticleSystem::new();
            for _ in 0..frames {
                system.update();
                system.spawn(Vec2::ZERO, &mut rng);
                system.spawn(Vec2::ZERO, &mut rng);
                system.enforce_cap(cap);
                prop_assert!(system.len() <= cap);
            }
        }

        #[test]
        fn prop_opacity_strictly_decreases(life in 1.0f32..50.0) {
            let mut system = ParticleSystem::new();
            system.push(spark(life));
            let mut last = system.iter().next().unwrap().opacity();
            loop {
                system.update();
                match system.iter().next() {
                    Some(p) => {
                        prop_assert!(p.opacity() < last);
                        prop_assert!(p.opacity() > 0.0);
                        last = p.opacity();
                    }
                    None => break,
                }
            }
        }
    }
}
