use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-frame interpolation factor toward the target.
const DEFAULT_SMOOTHING: f32 = 0.12;

/// Low-pass follow filter: the camera position is exponential smoothing of
/// the target position, applied independently per axis.
///
/// The factor is applied once per frame and is intentionally not scaled by
/// `dt`, matching the tuned feel at the nominal frame rate. That makes the
/// filter frame-rate-dependent; a dt-correct variant would use
/// `1 - exp(-k * dt)` as the factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FollowCamera {
    pub pos: Vec2,
    pub smoothing: f32,
}

impl FollowCamera {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// One frame of tracking toward `target`.
    pub fn update(&mut self, target: Vec2) {
        self.pos = self.pos.lerp(target, self.smoothing);
    }
}
