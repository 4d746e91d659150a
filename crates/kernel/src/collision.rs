use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tiles::TileWorld;

/// Kinematic state shared by every collidable entity: position, velocity,
/// and the half-extents of an axis-aligned box in world space. The box does
/// not rotate with an entity's heading — a deliberate simplification the
/// resolver relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, half: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half,
        }
    }

    /// The four box corners at the current position.
    pub fn corners(&self) -> [Vec2; 4] {
        corners_at(self.pos, self.half)
    }
}

fn corners_at(pos: Vec2, half: Vec2) -> [Vec2; 4] {
    [
        Vec2::new(pos.x - half.x, pos.y - half.y),
        Vec2::new(pos.x + half.x, pos.y - half.y),
        Vec2::new(pos.x - half.x, pos.y + half.y),
        Vec2::new(pos.x + half.x, pos.y + half.y),
    ]
}

/// A box touches a wall iff any of its four corners lands in a Wall tile.
/// Corner sampling under-detects walls thinner than the corner gap; that
/// approximation is kept for behavioral parity with the resolver's tuning.
pub fn touches_wall(world: &TileWorld, pos: Vec2, half: Vec2) -> bool {
    corners_at(pos, half).iter().any(|&c| world.is_wall(c))
}

/// Collision resolution strategy, selected per entity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolvePolicy {
    /// Resolve X then Y independently; a rejected axis keeps its position
    /// and takes a small reversed velocity kick, so entities slide along
    /// walls instead of stopping dead.
    #[default]
    SlideBounce,
    /// Commit the full displacement, then while a corner is on a wall halve
    /// velocity and step back along it. Softer transient than SlideBounce;
    /// same end-of-step guarantee.
    CornerPushback,
}

/// Velocity scale applied to a rejected axis: a small reversed bounce.
const BOUNCE_DAMPING: f32 = -0.2;
/// Velocity scale per pushback iteration.
const IMPACT_VELOCITY_SCALE: f32 = 0.5;
/// Fraction of velocity stepped back per pushback iteration.
const PUSHBACK_STEP: f32 = 0.1;
const PUSHBACK_ITERATIONS: usize = 8;

/// Apply a proposed frame displacement to a body, resolving against the
/// tile grid and clamping into world bounds. Position and velocity are
/// mutated in place; the no-wall-overlap invariant holds on return provided
/// it held on entry.
pub fn try_move(world: &TileWorld, body: &mut Body, disp: Vec2, policy: ResolvePolicy) {
    match policy {
        ResolvePolicy::SlideBounce => slide_bounce(world, body, disp),
        ResolvePolicy::CornerPushback => corner_pushback(world, body, disp),
    }
    clamp_to_world(world, body);
}

/// Axis-separated resolution, X before Y. The ordering produces the sliding
/// behavior: a diagonal move into a wall keeps its free component.
fn slide_bounce(world: &TileWorld, body: &mut Body, disp: Vec2) {
    let nx = body.pos.x + disp.x;
    if touches_wall(world, Vec2::new(nx, body.pos.y), body.half) {
        body.vel.x *= BOUNCE_DAMPING;
    } else {
        body.pos.x = nx;
    }

    let ny = body.pos.y + disp.y;
    if touches_wall(world, Vec2::new(body.pos.x, ny), body.half) {
        body.vel.y *= BOUNCE_DAMPING;
    } else {
        body.pos.y = ny;
    }
}

fn corner_pushback(world: &TileWorld, body: &mut Body, disp: Vec2) {
    let start = body.pos;
    body.pos += disp;
    for _ in 0..PUSHBACK_ITERATIONS {
        if !touches_wall(world, body.pos, body.half) {
            return;
        }
        body.vel *= IMPACT_VELOCITY_SCALE;
        body.pos -= body.vel * PUSHBACK_STEP;
    }
    if touches_wall(world, body.pos, body.half) {
        // The pre-move position satisfied the invariant at the end of the
        // previous step; fall back to it rather than end inside a wall.
        body.pos = start;
    }
}

/// Keep the body's box inside the world rectangle.
pub fn clamp_to_world(world: &TileWorld, body: &mut Body) {
    let bounds = world.bounds().shrink(body.half);
    body.pos = bounds.clamp_point(body.pos);
}
