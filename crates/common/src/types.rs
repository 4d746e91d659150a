use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Boolean control intents sampled once per frame before the simulation step.
///
/// The kernel consumes intents as an opaque read-only snapshot; how they are
/// produced (keyboard, touch buttons, a script) is the input layer's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub accel: bool,
    pub brake: bool,
}

impl Intents {
    /// Snapshot with no controls held.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle spanning `(0, 0)` to `size`.
    pub fn from_size(size: Vec2) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Shrink the rectangle by a margin on every side.
    pub fn shrink(&self, margin: Vec2) -> Self {
        Self {
            min: self.min + margin,
            max: self.max - margin,
        }
    }

    /// Clamp a point into the rectangle.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_default_is_idle() {
        let i = Intents::idle();
        assert!(!i.left && !i.right && !i.accel && !i.brake);
    }

    #[test]
    fn rect_contains_and_clamp() {
        let r = Rect::from_size(Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(11.0, 5.0)));
        assert_eq!(r.clamp_point(Vec2::new(-3.0, 12.0)), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn rect_shrink_applies_margin() {
        let r = Rect::from_size(Vec2::new(10.0, 10.0)).shrink(Vec2::splat(2.0));
        assert_eq!(r.min, Vec2::splat(2.0));
        assert_eq!(r.max, Vec2::splat(8.0));
    }
}
