//! Persistence: player snapshot serialization over an opaque key-value
//! save store.
//!
//! # Invariants
//! - Snapshots round-trip losslessly.
//! - Malformed or absent saved data never escapes the load boundary as an
//!   error; the caller keeps its just-initialized state.

pub mod snapshot;
pub mod store;

pub use snapshot::{SAVE_KEY, VehicleSnapshot, clear_save, load_vehicle, save_vehicle};
pub use store::{FileStore, MemoryStore, SaveStore, StoreError};

pub fn crate_info() -> &'static str {
    "tarmac-persist v0.1.0"
}
