//! Simulation kernel: vehicle dynamics, tile-grid collision, wander agents,
//! camera follow, and the per-frame session orchestrator.
//!
//! # Invariants
//! - No entity bounding box overlaps a Wall tile at the end of a step.
//! - Vehicle speed never exceeds its tuned maximum after integration.
//! - All mutable state is owned by the `Session` and touched on one thread;
//!   collaborators (input, render, persist) see snapshots or read-only views.

pub mod camera;
pub mod clock;
pub mod collision;
pub mod rng;
pub mod session;
pub mod tiles;
pub mod vehicle;
pub mod wander;

pub use camera::FollowCamera;
pub use clock::{FrameClock, MAX_FRAME_DT, clamp_dt};
pub use collision::{Body, ResolvePolicy};
pub use session::{Session, SessionConfig};
pub use tiles::{Tile, TileWorld, WorldConfig};
pub use vehicle::{Vehicle, VehicleTuning};
pub use wander::{WanderAgent, WanderPolicy};

pub fn crate_info() -> &'static str {
    "tarmac-kernel v0.1.0"
}
