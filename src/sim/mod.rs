//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-frame update only, driven by the display refresh
//! - Seeded RNG only
//! - Obstacles processed oldest first
//! - No rendering or platform dependencies

pub mod collision;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{out_of_bounds, ship_hits_pipe};
pub use starfield::Star;
pub use state::{CrashCause, GameEvent, GameState, PipePair, RunStatus, Ship, Viewport};
pub use tick::{TickInput, spawn_pipe, tick};
