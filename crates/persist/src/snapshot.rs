use serde::{Deserialize, Serialize};
use tarmac_kernel::Vehicle;

use crate::store::{SaveStore, StoreError};

/// Fixed key the player snapshot lives under in the save store.
pub const SAVE_KEY: &str = "tarmac.vehicle.json";

/// The persisted slice of player state: pose and velocity, nothing else.
/// Tuning, half-extents, and the world are reconstructed from config, so a
/// snapshot stays valid across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub vx: f32,
    pub vy: f32,
}

impl VehicleSnapshot {
    pub fn capture(vehicle: &Vehicle) -> Self {
        Self {
            x: vehicle.body.pos.x,
            y: vehicle.body.pos.y,
            angle: vehicle.angle,
            vx: vehicle.body.vel.x,
            vy: vehicle.body.vel.y,
        }
    }

    /// Merge the snapshot fields into a live vehicle, leaving everything
    /// the snapshot does not cover untouched.
    pub fn apply(&self, vehicle: &mut Vehicle) {
        vehicle.body.pos.x = self.x;
        vehicle.body.pos.y = self.y;
        vehicle.angle = self.angle;
        vehicle.body.vel.x = self.vx;
        vehicle.body.vel.y = self.vy;
    }
}

/// Serialize the player under the fixed key. Store and encoding failures
/// surface to the caller.
pub fn save_vehicle(store: &mut dyn SaveStore, vehicle: &Vehicle) -> Result<(), StoreError> {
    let snap = VehicleSnapshot::capture(vehicle);
    let payload = serde_json::to_string(&snap)?;
    store.put(SAVE_KEY, &payload)?;
    tracing::debug!(key = SAVE_KEY, "saved vehicle snapshot");
    Ok(())
}

/// Load the snapshot, if any. Absent data returns `None`; malformed data is
/// discarded with a warning and also returns `None` — corruption never
/// reaches the simulation's control flow.
pub fn load_vehicle(store: &dyn SaveStore) -> Result<Option<VehicleSnapshot>, StoreError> {
    let Some(payload) = store.get(SAVE_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str(&payload) {
        Ok(snap) => Ok(Some(snap)),
        Err(e) => {
            tracing::warn!(key = SAVE_KEY, error = %e, "discarding malformed snapshot");
            Ok(None)
        }
    }
}

/// Remove the persisted snapshot (the persistence half of a session reset).
pub fn clear_save(store: &mut dyn SaveStore) -> Result<(), StoreError> {
    store.remove(SAVE_KEY)
}
