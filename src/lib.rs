//! Stellar Evo - A side-scrolling starship arcade game with a study academy
//!
//! Core modules:
//! - `sim`: Seeded simulation (ship physics, pipes, starfield, scoring)
//! - `ui`: Run status transitions driven by player actions
//! - `renderer`: WebGPU rendering pipeline
//! - `academy`: Board mock papers from a generative-text service
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `profile` / `highscores` / `garage`: Player progress and the ship shop
//! - `tuning`: Data-driven game balance

pub mod academy;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod garage;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod profile;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use academy::AcademySession;
pub use highscores::HighScores;
pub use profile::Profile;
pub use tuning::Tuning;

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
