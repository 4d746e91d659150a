//! Input layer: raw key/button events folded into the shared intent
//! snapshot the kernel consumes.
//!
//! # Invariants
//! - The kernel never sees raw events, only per-frame [`Intents`] snapshots.
//! - Keyboard and touch-button sources produce the same intents.
//!
//! [`Intents`]: tarmac_common::Intents

pub mod action;

pub use action::{Command, IntentTracker, Key};

pub fn crate_info() -> &'static str {
    "tarmac-input v0.1.0"
}
