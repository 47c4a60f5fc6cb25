//! Data-driven game balance
//!
//! Every gameplay constant lives here. Defaults reproduce the shipped
//! "challenging" difficulty; a partial JSON override can be stored under
//! [`Tuning::STORAGE_KEY`] to experiment without rebuilding.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persistence::KeyValueStore;

/// Errors raised while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning override is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants, all in CSS pixels / frames / milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Downward acceleration added to velocity every frame
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub jump_force: f32,
    /// Fixed horizontal ship position
    pub ship_x: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    /// How far the ship may leave the viewport (top and bottom) before the run ends
    pub bounds_tolerance: f32,

    // === Display rotation ===
    /// Velocity to target-angle factor
    pub tilt_factor: f32,
    /// Maximum nose-down tilt (radians)
    pub tilt_down: f32,
    /// Maximum nose-up tilt (radians)
    pub tilt_up: f32,
    /// Per-frame lerp factor toward the target tilt
    pub tilt_smoothing: f32,

    // === Obstacles ===
    /// Base spawn interval in milliseconds (divided by the speed multiplier)
    pub pipe_spawn_interval_ms: f64,
    /// Base scroll speed in pixels per frame
    pub base_pipe_speed: f32,
    pub pipe_width: f32,
    /// Realised gap between top and bottom pipe
    pub pipe_gap_min: f32,
    /// Only used to keep spawned gaps away from the bottom edge
    pub pipe_gap_max: f32,
    /// Minimum distance from the top of the viewport to a gap
    pub spawn_margin: f32,
    /// Distance past the left edge at which the oldest pair is dropped
    pub offscreen_margin: f32,

    // === Pacing ===
    /// Speed multiplier a fresh run starts with
    pub speed_multiplier: f32,

    // === Starfield ===
    pub star_count: usize,
    pub star_max_size: f32,
    pub star_min_speed: f32,
    pub star_speed_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.28,
            jump_force: -5.2,
            ship_x: 50.0,
            ship_width: 44.0,
            ship_height: 28.0,
            bounds_tolerance: 50.0,

            tilt_factor: 0.1,
            tilt_down: PI / 4.0,
            tilt_up: PI / 6.0,
            tilt_smoothing: 0.1,

            pipe_spawn_interval_ms: 1800.0,
            base_pipe_speed: 3.0,
            pipe_width: 26.0,
            pipe_gap_min: 140.0,
            pipe_gap_max: 190.0,
            spawn_margin: 100.0,
            offscreen_margin: 100.0,

            speed_multiplier: 1.0,

            star_count: 150,
            star_max_size: 2.0,
            star_min_speed: 0.1,
            star_speed_range: 0.3,
        }
    }
}

impl Tuning {
    /// LocalStorage key for an optional override
    pub const STORAGE_KEY: &'static str = "sd_tuning";

    /// Parse a (possibly partial) override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.pipe_spawn_interval_ms > 0.0) {
            return invalid("pipe_spawn_interval_ms", "must be positive");
        }
        if !(self.speed_multiplier > 0.0) {
            return invalid("speed_multiplier", "must be positive");
        }
        if !(self.pipe_gap_min > 0.0) {
            return invalid("pipe_gap_min", "must be positive");
        }
        if self.pipe_gap_min > self.pipe_gap_max {
            return invalid("pipe_gap_min", "must not exceed pipe_gap_max");
        }
        if !(self.ship_width > 0.0 && self.ship_height > 0.0) {
            return invalid("ship_width", "ship dimensions must be positive");
        }
        if !(self.pipe_width > 0.0) {
            return invalid("pipe_width", "must be positive");
        }
        if self.tilt_up < 0.0 || self.tilt_down < 0.0 {
            return invalid("tilt_up", "tilt limits must be non-negative");
        }
        Ok(())
    }

    /// Spawn interval at the given speed multiplier
    pub fn spawn_interval_ms(&self, speed_multiplier: f32) -> f64 {
        self.pipe_spawn_interval_ms / speed_multiplier as f64
    }

    /// Load the override from storage, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {e}");
                Self::default()
            }
        }
    }
}
