use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tarmac_common::Rect;

use crate::collision::{self, Body};
use crate::tiles::{Tile, TileWorld};

/// Reactive heading-correction rule: forward-step, re-check, fixed-angle
/// correction on failure. No pathfinding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WanderPolicy {
    /// Fixed quarter-turn when the stepped-to position is off the road
    /// network; the next step tries the new heading.
    OffRoadQuarterTurn,
    /// Reverse heading on leaving a fixed sub-rectangle of the world; tiles
    /// are ignored entirely.
    BoundsReverse(Rect),
}

/// An autonomous agent moving at constant speed along its heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WanderAgent {
    pub body: Body,
    /// Heading in radians; 0 points along +X.
    pub angle: f32,
    pub speed: f32,
    pub policy: WanderPolicy,
}

impl WanderAgent {
    pub fn new(pos: Vec2, angle: f32, speed: f32, half: Vec2, policy: WanderPolicy) -> Self {
        Self {
            body: Body::new(pos, half),
            angle,
            speed,
            policy,
        }
    }

    /// Advance one frame: move forward, apply the policy's heading
    /// correction if the new position fails its check, clamp to world
    /// bounds. The correction is a pure rotation — no positional fix-up
    /// accompanies it.
    pub fn step(&mut self, world: &TileWorld, dt: f32) {
        self.body.pos += Vec2::from_angle(self.angle) * self.speed * dt;

        match self.policy {
            WanderPolicy::OffRoadQuarterTurn => {
                if world.classify(self.body.pos) != Tile::Road {
                    self.angle += FRAC_PI_2;
                }
            }
            WanderPolicy::BoundsReverse(bounds) => {
                if !bounds.contains(self.body.pos) {
                    self.angle += PI;
                }
            }
        }

        collision::clamp_to_world(world, &mut self.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 world, 64-unit tiles, a single Road row at tile y=2.
    fn road_world() -> TileWorld {
        let mut world = TileWorld::with_fill(10, 10, 64.0, Tile::Open);
        for x in 0..10 {
            world.set_tile(x, 2, Tile::Road);
        }
        world
    }

    fn agent_on_road() -> WanderAgent {
        // Mid-row, heading +X, well inside the road band.
        WanderAgent::new(
            Vec2::new(160.0, 160.0),
            0.0,
            55.0,
            Vec2::splat(10.0),
            WanderPolicy::OffRoadQuarterTurn,
        )
    }

    #[test]
    fn stays_on_road_without_correction() {
        let world = road_world();
        let mut agent = agent_on_road();
        agent.step(&world, 0.1);
        assert_eq!(agent.angle, 0.0);
        assert!((agent.body.pos.x - 165.5).abs() < 1e-4);
        assert_eq!(agent.body.pos.y, 160.0);
    }

    #[test]
    fn off_road_landing_turns_quarter() {
        let world = road_world();
        let mut agent = agent_on_road();
        // Point straight down so the step leaves the road band.
        agent.angle = FRAC_PI_2;
        agent.body.pos = Vec2::new(160.0, 186.0);
        agent.step(&world, 0.1);
        // Landed at y=191.5 which is still tile y=2 (road ends at 192)...
        assert_eq!(agent.angle, FRAC_PI_2);
        agent.step(&world, 0.1);
        // ...then crossed onto Open ground: exactly one quarter-turn.
        assert!((agent.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn correction_is_pure_rotation() {
        let world = road_world();
        let mut agent = agent_on_road();
        // Parked off-road: a zero-dt evaluation moves nothing but still
        // applies the heading correction.
        agent.body.pos = Vec2::new(160.0, 400.0);
        let before = agent.body.pos;
        agent.step(&world, 0.0);
        assert_eq!(agent.body.pos, before);
        assert!((agent.angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn four_corrections_restore_heading() {
        let world = road_world();
        let mut agent = agent_on_road();
        agent.body.pos = Vec2::new(160.0, 400.0);
        for _ in 0..4 {
            agent.step(&world, 0.0);
        }
        assert!((agent.angle - 2.0 * PI).abs() < 1e-5);
    }

    #[test]
    fn world_edge_clamps_position() {
        let world = road_world();
        let mut agent = agent_on_road();
        agent.policy = WanderPolicy::BoundsReverse(world.bounds());
        agent.body.pos = Vec2::new(630.0, 160.0);
        agent.angle = 0.0;
        agent.step(&world, 1.0);
        // 630 + 55 overshoots the 640-unit world; clamped to 640 - half.
        assert_eq!(agent.body.pos.x, 630.0);
    }

    #[test]
    fn bounds_policy_reverses_heading_outside_rect() {
        let world = road_world();
        let inner = Rect::new(Vec2::splat(100.0), Vec2::splat(500.0));
        let mut agent = WanderAgent::new(
            Vec2::new(490.0, 300.0),
            0.0,
            55.0,
            Vec2::splat(10.0),
            WanderPolicy::BoundsReverse(inner),
        );
        agent.step(&world, 0.5);
        // Stepped to x=517.5, outside the sub-rectangle: heading flips 180.
        assert!((agent.angle - PI).abs() < 1e-6);
        // Inside the rectangle nothing corrects.
        let mut calm = WanderAgent::new(
            Vec2::new(300.0, 300.0),
            0.0,
            55.0,
            Vec2::splat(10.0),
            WanderPolicy::BoundsReverse(inner),
        );
        calm.step(&world, 0.1);
        assert_eq!(calm.angle, 0.0);
    }
}
