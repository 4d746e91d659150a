//! Shared leaf types used across the tarmac workspace.
//!
//! # Invariants
//! - These types carry no behavior beyond construction and queries; all
//!   simulation logic lives in the kernel.

pub mod types;

pub use types::{Intents, Rect};

pub fn crate_info() -> &'static str {
    "tarmac-common v0.1.0"
}
