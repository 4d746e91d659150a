//! Rendering adapter: renderer-agnostic interface over read-only session
//! state.
//!
//! # Invariants
//! - Renderers read entity positions and tiles; they never mutate the
//!   session — simulation truth is kernel-owned.
//! - The kernel never calls into rendering.

pub mod hud;
pub mod renderer;

pub use hud::HudSummary;
pub use renderer::{DebugTextRenderer, Renderer, TileRect, Viewport};

pub fn crate_info() -> &'static str {
    "tarmac-render v0.1.0"
}
