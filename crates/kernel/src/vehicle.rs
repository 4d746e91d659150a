use glam::Vec2;
use serde::{Deserialize, Serialize};
use tarmac_common::Intents;

use crate::collision::Body;

/// Handling parameters for a vehicle. Accelerations are in world units per
/// second squared, steer speed in radians per second, grip is the
/// exponential velocity-decay rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub brake: f32,
    pub steer_speed: f32,
    pub grip: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            max_speed: 300.0,
            accel: 400.0,
            brake: 700.0,
            steer_speed: 3.5,
            grip: 6.0,
        }
    }
}

/// Braking decelerates at 70% of the brake constant so it reads as drag,
/// not instant reverse.
const BRAKE_AUTHORITY: f32 = 0.7;
/// Steering authority reaches zero at this multiple of max speed...
const STEER_SPEED_HEADROOM: f32 = 1.2;
/// ...but never drops below this floor, so top-speed cars still turn.
const STEER_FLOOR: f32 = 0.12;

/// The player-controlled vehicle: a kinematic body plus heading and tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub body: Body,
    /// Heading in radians; 0 points along +X.
    pub angle: f32,
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(pos: Vec2, half: Vec2, tuning: VehicleTuning) -> Self {
        Self {
            body: Body::new(pos, half),
            angle: 0.0,
            tuning,
        }
    }

    pub fn speed(&self) -> f32 {
        self.body.vel.length()
    }

    /// Advance velocity and heading from control intents over `dt` seconds
    /// and return the frame displacement. The vehicle does not move itself;
    /// the displacement goes to the collision resolver, which keeps this
    /// step purely numeric and testable in isolation.
    ///
    /// `dt` is assumed non-negative and clamped upstream; there are no
    /// failure exits.
    pub fn integrate(&mut self, intents: &Intents, dt: f32) -> Vec2 {
        let forward = Vec2::from_angle(self.angle);

        if intents.accel {
            self.body.vel += forward * self.tuning.accel * dt;
        }
        if intents.brake {
            self.body.vel -= forward * self.tuning.brake * dt * BRAKE_AUTHORITY;
        }

        // Steering authority shrinks with speed: near-stationary cars turn
        // at almost full rate, near-top-speed cars at the floor rate.
        let steer_factor = (1.0
            - self.speed() / (self.tuning.max_speed * STEER_SPEED_HEADROOM))
            .clamp(STEER_FLOOR, 1.0);
        if intents.left {
            self.angle -= self.tuning.steer_speed * dt * steer_factor;
        }
        if intents.right {
            self.angle += self.tuning.steer_speed * dt * steer_factor;
        }

        // Exponential decay is frame-rate-consistent and can never
        // overshoot into negative speed, unlike a linear drag term.
        self.body.vel *= (-self.tuning.grip * dt).exp();

        let speed = self.speed();
        if speed > self.tuning.max_speed {
            self.body.vel *= self.tuning.max_speed / speed;
        }

        self.body.vel * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(21.0, 11.0),
            VehicleTuning::default(),
        )
    }

    fn held(left: bool, right: bool, accel: bool, brake: bool) -> Intents {
        Intents {
            left,
            right,
            accel,
            brake,
        }
    }

    #[test]
    fn speed_cap_holds_for_any_intents() {
        let combos = [
            held(false, false, true, false),
            held(true, false, true, false),
            held(false, true, true, true),
            held(true, true, true, true),
        ];
        for intents in combos {
            let mut v = vehicle();
            for _ in 0..500 {
                v.integrate(&intents, 0.05);
                assert!(
                    v.speed() <= v.tuning.max_speed + 1e-3,
                    "speed {} exceeded cap under {intents:?}",
                    v.speed()
                );
            }
        }
    }

    #[test]
    fn accel_from_rest_scenario_numbers() {
        // accel=400, dt=0.1, from rest: vx gains 40 before grip, then the
        // whole velocity is scaled by exp(-grip * 0.1).
        let mut v = vehicle();
        let disp = v.integrate(&held(false, false, true, false), 0.1);
        let expected_vx = 40.0 * (-v.tuning.grip * 0.1_f32).exp();
        assert!((v.body.vel.x - expected_vx).abs() < 1e-4);
        assert!(v.body.vel.y.abs() < 1e-6);
        assert!((disp.x - expected_vx * 0.1).abs() < 1e-5);
    }

    #[test]
    fn grip_decay_is_step_size_invariant() {
        // One big step and many small steps over the same total time decay
        // by the same factor.
        let mut coarse = vehicle();
        coarse.body.vel = Vec2::new(200.0, 0.0);
        coarse.integrate(&Intents::idle(), 1.0);

        let mut fine = vehicle();
        fine.body.vel = Vec2::new(200.0, 0.0);
        for _ in 0..100 {
            fine.integrate(&Intents::idle(), 0.01);
        }

        let expected = 200.0 * (-6.0_f32).exp();
        assert!((coarse.body.vel.x - expected).abs() < 1e-3);
        assert!((fine.body.vel.x - expected).abs() < 1e-2);
    }

    #[test]
    fn braking_is_weaker_than_accelerating() {
        let mut accelerated = vehicle();
        accelerated.integrate(&held(false, false, true, false), 0.1);

        let mut braked = vehicle();
        braked.integrate(&held(false, false, false, true), 0.1);

        // brake=700 at 70% authority = 490 effective, vs accel=400; the
        // asymmetry shows up as a reversed velocity of larger magnitude.
        assert!(braked.body.vel.x < 0.0);
        assert!((braked.body.vel.x.abs() - 49.0 * (-0.6_f32).exp()).abs() < 1e-3);
        assert!(accelerated.body.vel.x > 0.0);
    }

    #[test]
    fn steering_authority_shrinks_with_speed() {
        let mut slow = vehicle();
        slow.integrate(&held(true, false, false, false), 0.1);
        let slow_turn = slow.angle.abs();

        let mut fast = vehicle();
        fast.body.vel = Vec2::new(fast.tuning.max_speed, 0.0);
        fast.integrate(&held(true, false, false, false), 0.1);
        let fast_turn = fast.angle.abs();

        assert!(slow_turn > fast_turn);
        // At rest the factor clamps to 1.
        assert!((slow_turn - 0.35).abs() < 1e-6);
        let fast_factor: f32 = (1.0_f32 - 300.0 / (300.0 * 1.2)).clamp(0.12, 1.0);
        assert!((fast_turn - 3.5 * 0.1 * fast_factor).abs() < 1e-5);

        // Past the headroom point the factor pins to the floor.
        let mut overdriven = vehicle();
        overdriven.body.vel = Vec2::new(500.0, 0.0);
        overdriven.integrate(&held(true, false, false, false), 0.1);
        assert!((overdriven.angle.abs() - 3.5 * 0.1 * 0.12).abs() < 1e-5);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut v = vehicle();
        v.body.vel = Vec2::new(50.0, 20.0);
        let before = v.clone();
        let disp = v.integrate(&held(true, false, true, true), 0.0);
        assert_eq!(disp, Vec2::ZERO);
        assert_eq!(v.body.vel, before.body.vel);
        assert_eq!(v.angle, before.angle);
    }

    #[test]
    fn displacement_is_velocity_times_dt() {
        let mut v = vehicle();
        v.body.vel = Vec2::new(100.0, -40.0);
        let disp = v.integrate(&Intents::idle(), 0.05);
        assert!((disp - v.body.vel * 0.05).length() < 1e-6);
    }
}
