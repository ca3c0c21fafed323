//! Follow-chain bodies
//!
//! A chain is a head that eases toward a target and a tail of segments that
//! each re-project to a fixed distance behind their predecessor.

use glam::Vec2;
use rand::Rng;

use crate::{heading, unit_from_angle};

/// A single body segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub pos: Vec2,
    /// Heading toward the previous segment (radians). Always 0 for the head.
    pub angle: f32,
}

impl Segment {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, angle: 0.0 }
    }
}

/// Ordered head-to-tail segments with constant spacing
#[derive(Debug, Clone)]
pub struct Chain {
    segments: Vec<Segment>,
    spacing: f32,
}

impl Chain {
    /// Build a chain from explicit positions (head first).
    ///
    /// An empty iterator yields a single segment at the origin, so a chain
    /// always has a head.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>, spacing: f32) -> Self {
        let mut segments: Vec<Segment> = positions.into_iter().map(Segment::at).collect();
        if segments.is_empty() {
            segments.push(Segment::at(Vec2::ZERO));
        }
        Self { segments, spacing }
    }

    /// A straight chain laid out along -x behind `anchor`
    pub fn trailing(anchor: Vec2, count: usize, spacing: f32) -> Self {
        Self::from_positions(
            (0..count).map(|i| anchor - Vec2::new(i as f32 * spacing, 0.0)),
            spacing,
        )
    }

    /// Segments scattered uniformly over `[0, bounds.x) x [0, bounds.y)`.
    ///
    /// The first `follow` pass pulls them into shape behind the head.
    pub fn scattered<R: Rng>(count: usize, spacing: f32, bounds: Vec2, rng: &mut R) -> Self {
        Self::from_positions(
            (0..count).map(|_| {
                Vec2::new(
                    rng.random::<f32>() * bounds.x,
                    rng.random::<f32>() * bounds.y,
                )
            }),
            spacing,
        )
    }

    pub fn head(&self) -> Vec2 {
        self.segments[0].pos
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Move the head toward `target` and drag the tail along behind it
    pub fn step_toward(&mut self, target: Vec2, rate: f32) {
        self.ease_head(target, rate);
        self.follow();
    }

    /// Exponential approach: the head covers `rate` of the remaining distance
    pub fn ease_head(&mut self, target: Vec2, rate: f32) {
        let head = &mut self.segments[0].pos;
        *head += (target - *head) * rate;
    }

    /// Re-project every tail segment to exactly `spacing` behind its predecessor
    pub fn follow(&mut self) {
        for i in 1..self.segments.len() {
            let lead = self.segments[i - 1].pos;
            let seg = &mut self.segments[i];
            let angle = heading(seg.pos, lead);
            seg.pos = lead - unit_from_angle(angle) * self.spacing;
            seg.angle = angle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_spacing(chain: &Chain) {
        for pair in chain.segments().windows(2) {
            let d = pair[0].pos.distance(pair[1].pos);
            assert!(
                (d - chain.spacing()).abs() < 1e-3,
                "segment distance {d} != spacing {}",
                chain.spacing()
            );
        }
    }

    #[test]
    fn test_head_eases_toward_target() {
        let mut chain = Chain::from_positions([Vec2::ZERO], 8.0);
        chain.step_toward(Vec2::new(100.0, 0.0), 0.02);
        assert!((chain.head().x - 2.0).abs() < 1e-5);
        assert_eq!(chain.head().y, 0.0);
    }

    #[test]
    fn test_head_at_target_stays_put() {
        let p = Vec2::new(100.0, 100.0);
        let mut chain = Chain::from_positions([p, p, p], 8.0);
        chain.step_toward(p, 0.02);
        assert_eq!(chain.head(), p);
        // Coincident segments get heading 0 and land directly behind on -x
        assert_eq!(chain.segments()[1].angle, 0.0);
        assert!((chain.segments()[1].pos - Vec2::new(92.0, 100.0)).length() < 1e-4);
        assert_spacing(&chain);
        for seg in chain.segments() {
            assert!(!seg.pos.is_nan());
            assert!(!seg.angle.is_nan());
        }
    }

    #[test]
    fn test_trailing_layout() {
        let chain = Chain::trailing(Vec2::new(50.0, 20.0), 4, 8.0);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.segments()[3].pos, Vec2::new(26.0, 20.0));
        assert_spacing(&chain);
    }

    #[test]
    fn test_empty_positions_still_has_head() {
        let chain = Chain::from_positions(std::iter::empty(), 8.0);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head(), Vec2::ZERO);
    }

    #[test]
    fn test_scattered_chain_snaps_into_spacing() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut chain = Chain::scattered(90, 8.0, Vec2::new(800.0, 600.0), &mut rng);
        for seg in chain.segments() {
            assert!((0.0..800.0).contains(&seg.pos.x));
            assert!((0.0..600.0).contains(&seg.pos.y));
        }
        chain.step_toward(Vec2::new(400.0, 300.0), 0.015);
        assert_spacing(&chain);
    }

    #[test]
    fn test_tail_angle_points_at_predecessor() {
        let mut chain = Chain::from_positions([Vec2::new(0.0, 10.0), Vec2::ZERO], 8.0);
        chain.follow();
        let a = chain.segments()[1].angle;
        assert!((a - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert!((chain.segments()[1].pos - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_spacing_holds_after_step(
            points in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 1..40),
            target in (-2000.0f32..2000.0, -2000.0f32..2000.0),
            rate in 0.001f32..1.0,
            spacing in 1.0f32..30.0,
        ) {
            let mut chain = Chain::from_positions(
                points.into_iter().map(|(x, y)| Vec2::new(x, y)),
                spacing,
            );
            chain.step_toward(Vec2::new(target.0, target.1), rate);
            for pair in chain.segments().windows(2) {
                let d = pair[0].pos.distance(pair[1].pos);
                prop_assert!((d - spacing).abs() < 1e-2, "distance {} spacing {}", d, spacing);
            }
        }
    }
}
