//! Game state and core simulation types
//!
//! One `GameState` owns everything the frame loop mutates. Positions are
//! CSS pixels with the origin at the top-left corner and y pointing down.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::starfield::{Star, generate_stars};
use crate::tuning::Tuning;

/// Mutually exclusive application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// Title screen
    #[default]
    Splash,
    /// Launch prompt before a run
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
    /// Ship shop
    Garage,
    /// Best runs
    Leaderboard,
    /// Study academy (has its own sub-modes)
    Academy,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Ship drifted too far above or below the viewport
    OutOfBounds,
    /// Ship touched a pipe
    Obstacle,
}

/// Things that happened during a tick, drained by the driver for audio and
/// persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored { score: u64 },
    Crashed { cause: CrashCause },
}

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity in pixels per frame (positive = down)
    pub velocity: f32,
    /// Display-only tilt in radians, smoothed toward the velocity
    pub rotation: f32,
}

impl Ship {
    pub fn new(tuning: &Tuning, y: f32) -> Self {
        Self {
            x: tuning.ship_x,
            y,
            width: tuning.ship_width,
            height: tuning.ship_height,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A top and bottom pipe with a gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Bottom edge of the top pipe
    pub top_height: f32,
    /// Top edge of the bottom pipe
    pub bottom_y: f32,
    /// Set once the ship has fully cleared this pair
    pub passed: bool,
}

impl PipePair {
    pub fn new(x: f32, width: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            width,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub status: RunStatus,
    pub viewport: Viewport,
    pub ship: Ship,
    /// Oldest first
    pub pipes: Vec<PipePair>,
    pub stars: Vec<Star>,
    pub score: u64,
    /// Scales scroll speed and spawn rate
    pub speed_multiplier: f32,
    /// Timestamp (ms) of the last pipe spawn
    pub last_spawn_ms: f64,
    /// Events queued during ticks, oldest first
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state on the splash screen sized to the viewport
    pub fn new(seed: u64, tuning: Tuning, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let viewport = Viewport { width, height };
        let stars = generate_stars(&mut rng, &tuning, viewport);
        let ship = Ship::new(&tuning, height / 2.0);
        let speed_multiplier = tuning.speed_multiplier;

        Self {
            tuning,
            status: RunStatus::Splash,
            viewport,
            ship,
            pipes: Vec::new(),
            stars,
            score: 0,
            speed_multiplier,
            last_spawn_ms: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Viewport changed: regenerate the starfield and recenter the ship
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
        self.stars = generate_stars(&mut self.rng, &self.tuning, self.viewport);
        self.ship.y = height / 2.0;
    }

    /// Reset the run and start playing
    pub fn start_run(&mut self, now_ms: f64) {
        self.status = RunStatus::Playing;
        self.score = 0;
        self.pipes.clear();
        self.ship = Ship::new(&self.tuning, self.viewport.height / 2.0);
        self.speed_multiplier = self.tuning.speed_multiplier;
        self.last_spawn_ms = now_ms;
        log::info!("Run started");
    }

    /// End the run. Only the first call per run has any effect.
    pub fn end_run(&mut self, cause: CrashCause) {
        if self.status != RunStatus::Playing {
            return;
        }
        self.status = RunStatus::GameOver;
        self.events.push(GameEvent::Crashed { cause });
        log::info!("Run over ({:?}) with score {}", cause, self.score);
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_playing(&self) -> bool {
        self.status == RunStatus::Playing
    }
}
