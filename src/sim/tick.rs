//! Per-frame simulation step
//!
//! Called once per display refresh. There is no fixed timestep: all rates
//! are per frame and tuned against a typical 60 Hz display, while pipe
//! spawning is gated on wall-clock milliseconds.

use rand::Rng;

use super::collision::{out_of_bounds, pipe_cleared, ship_hits_pipe};
use super::starfield::scroll_stars;
use super::state::{CrashCause, GameEvent, GameState, PipePair};
use crate::lerp;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer/tap or space: one upward impulse
    pub flap: bool,
}

/// Advance the game state by one frame.
///
/// `now_ms` is the monotonically increasing frame timestamp. Does nothing
/// unless a run is in progress.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if !state.is_playing() {
        return;
    }

    if input.flap {
        state.ship.velocity = state.tuning.jump_force;
        state.events.push(GameEvent::Flapped);
    }

    scroll_stars(
        &mut state.stars,
        state.speed_multiplier,
        state.viewport.width,
    );

    integrate_ship(state);

    if out_of_bounds(
        &state.ship,
        state.viewport,
        state.tuning.bounds_tolerance,
    ) {
        state.end_run(CrashCause::OutOfBounds);
    }

    if now_ms - state.last_spawn_ms > state.tuning.spawn_interval_ms(state.speed_multiplier) {
        spawn_pipe(state);
        state.last_spawn_ms = now_ms;
    }

    advance_pipes(state);

    // Drop at most the oldest pair per frame
    let margin = state.tuning.offscreen_margin;
    if state.pipes.first().is_some_and(|p| p.right() < -margin) {
        state.pipes.remove(0);
    }
}

/// Gravity, position and cosmetic tilt
fn integrate_ship(state: &mut GameState) {
    let t = &state.tuning;
    let ship = &mut state.ship;

    ship.y += ship.velocity;
    ship.velocity += t.gravity;

    let target = (ship.velocity * t.tilt_factor).clamp(-t.tilt_up, t.tilt_down);
    ship.rotation = lerp(ship.rotation, target, t.tilt_smoothing);
}

/// Append one pipe pair at the right edge with a random gap position
pub fn spawn_pipe(state: &mut GameState) {
    let t = &state.tuning;
    // The max gap only reserves room at the bottom; the realised gap is always the minimum
    let span = (state.viewport.height - t.pipe_gap_max - 2.0 * t.spawn_margin).max(0.0);
    let top_height = state.rng.random::<f32>() * span + t.spawn_margin;

    state.pipes.push(PipePair::new(
        state.viewport.width,
        t.pipe_width,
        top_height,
        t.pipe_gap_min,
    ));
    log::trace!("Spawned pipe pair, gap top {top_height:.1}");
}

/// Scroll pipes, then run collision and scoring in list order
fn advance_pipes(state: &mut GameState) {
    let step = state.tuning.base_pipe_speed * state.speed_multiplier;
    let mut crashed = false;

    for pipe in &mut state.pipes {
        pipe.x -= step;

        if ship_hits_pipe(&state.ship, pipe) {
            crashed = true;
        }

        if !pipe.passed && pipe_cleared(&state.ship, pipe) {
            pipe.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }

    if crashed {
        state.end_run(CrashCause::Obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RunStatus;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn playing() -> GameState {
        let mut state = GameState::new(12345, Tuning::default(), W, H);
        state.start_run(0.0);
        state
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn first_tick_applies_gravity_but_not_displacement() {
        let mut state = playing();
        let y0 = state.ship.y;
        assert_eq!(y0, H / 2.0);

        tick(&mut state, &idle(), 16.0);
        assert_eq!(state.ship.velocity, 0.28);
        assert_eq!(state.ship.y, y0);

        tick(&mut state, &idle(), 32.0);
        assert!(state.ship.y > y0);
        assert_eq!(state.ship.y, y0 + 0.28);
    }

    #[test]
    fn does_nothing_outside_play() {
        let mut state = GameState::new(1, Tuning::default(), W, H);
        let stars = state.stars.clone();
        let y = state.ship.y;

        tick(&mut state, &TickInput { flap: true }, 10_000.0);

        assert_eq!(state.status, RunStatus::Splash);
        assert_eq!(state.ship.velocity, 0.0);
        assert_eq!(state.ship.y, y);
        assert_eq!(state.stars, stars);
        assert!(state.pipes.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn flap_sets_jump_velocity() {
        let mut state = playing();
        state.ship.velocity = 4.0;
        tick(&mut state, &TickInput { flap: true }, 16.0);

        // Moved by the jump, then gravity applied
        assert_eq!(state.ship.y, H / 2.0 - 5.2);
        assert!((state.ship.velocity - (-5.2 + 0.28)).abs() < 1e-6);
        assert_eq!(state.drain_events(), vec![GameEvent::Flapped]);
    }

    #[test]
    fn falling_off_the_bottom_ends_the_run() {
        let mut state = playing();
        let mut now = 0.0;
        while state.is_playing() {
            now += 16.0;
            tick(&mut state, &idle(), now);
            assert!(now < 60_000.0, "ship never left the viewport");
        }
        assert_eq!(state.status, RunStatus::GameOver);
        assert!(state.ship.bottom() > H + 50.0);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Crashed { cause: CrashCause::OutOfBounds })
        );
    }

    #[test]
    fn spawn_waits_for_interval() {
        let mut state = playing();
        state.ship.velocity = -0.28; // hover
        tick(&mut state, &idle(), 1800.0);
        assert!(state.pipes.is_empty(), "spawn gate is strictly greater-than");

        tick(&mut state, &idle(), 1800.5);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.last_spawn_ms, 1800.5);

        tick(&mut state, &idle(), 1801.0);
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn spawned_pair_respects_margins() {
        let mut state = playing();
        tick(&mut state, &idle(), 2000.0);

        assert_eq!(state.pipes.len(), 1);
        let pipe = &state.pipes[0];
        assert_eq!(pipe.x, W - 3.0);
        assert_eq!(pipe.width, 26.0);
        assert!((pipe.gap() - 140.0).abs() < 1e-3);
        assert!(pipe.top_height >= 100.0);
        assert!(pipe.top_height < H - 190.0 - 100.0);
        assert!(!pipe.passed);
    }

    #[test]
    fn faster_multiplier_spawns_sooner() {
        let mut state = playing();
        state.speed_multiplier = 2.0;
        tick(&mut state, &idle(), 901.0);
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn tiny_viewport_pins_gap_to_top_margin() {
        let mut state = GameState::new(3, Tuning::default(), 300.0, 200.0);
        state.start_run(0.0);
        spawn_pipe(&mut state);
        assert_eq!(state.pipes[0].top_height, 100.0);
        assert_eq!(state.pipes[0].gap(), 140.0);
    }

    #[test]
    fn score_increments_once_per_pair() {
        let mut state = playing();
        state.ship.y = 150.0;
        // Right edge at 50.5, one step of 3px puts it behind the ship's left edge
        state.pipes.push(PipePair::new(24.5, 26.0, 100.0, 140.0));

        state.ship.velocity = -0.28;
        tick(&mut state, &idle(), 16.0);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);

        for i in 0..5 {
            state.ship.velocity = -0.28;
            tick(&mut state, &idle(), 32.0 + 16.0 * i as f64);
        }
        assert_eq!(state.score, 1);
        let scored: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .collect();
        assert_eq!(scored, vec![GameEvent::Scored { score: 1 }]);
    }

    #[test]
    fn ship_above_top_pipe_crashes() {
        let mut state = playing();
        state.ship.y = 20.0; // entirely above top_height 100
        state.ship.velocity = -0.28;
        state.pipes.push(PipePair::new(60.0, 26.0, 100.0, 140.0));

        tick(&mut state, &idle(), 16.0);

        assert_eq!(state.status, RunStatus::GameOver);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Crashed { cause: CrashCause::Obstacle })
        );
    }

    #[test]
    fn ship_in_gap_survives_overlap() {
        let mut state = playing();
        state.ship.y = 150.0;
        state.ship.velocity = -0.28;
        state.pipes.push(PipePair::new(60.0, 26.0, 100.0, 140.0));

        tick(&mut state, &idle(), 16.0);
        assert!(state.is_playing());
    }

    #[test]
    fn crash_and_score_in_same_pass() {
        let mut state = playing();
        state.ship.y = 20.0;
        state.ship.velocity = -0.28;
        // Oldest pair is being cleared, the next one is hit
        state.pipes.push(PipePair::new(24.5, 26.0, 100.0, 140.0));
        state.pipes.push(PipePair::new(60.0, 26.0, 100.0, 140.0));

        tick(&mut state, &idle(), 16.0);

        assert_eq!(state.status, RunStatus::GameOver);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn offscreen_pair_removed_once_past_margin() {
        let mut state = playing();
        state.ship.y = 300.0;
        // right edge = -97 + 26 - 3 = -74 after the step: kept
        state.pipes.push(PipePair::new(-97.0, 26.0, 0.0, 600.0));
        state.pipes.push(PipePair::new(400.0, 26.0, 0.0, 600.0));
        state.ship.velocity = -0.28;
        tick(&mut state, &idle(), 16.0);
        assert_eq!(state.pipes.len(), 2);

        // Walk it past -100
        let mut now = 16.0;
        while state.pipes.len() == 2 {
            state.ship.velocity = -0.28;
            now += 16.0;
            tick(&mut state, &idle(), now);
        }
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, 400.0 - 3.0 * (now / 16.0) as f32);
    }

    #[test]
    fn only_one_pair_removed_per_frame() {
        let mut state = playing();
        state.ship.velocity = -0.28;
        state.pipes.push(PipePair::new(-300.0, 26.0, 0.0, 600.0));
        state.pipes.push(PipePair::new(-300.0, 26.0, 0.0, 600.0));

        tick(&mut state, &idle(), 16.0);
        assert_eq!(state.pipes.len(), 1);
        state.ship.velocity = -0.28;
        tick(&mut state, &idle(), 32.0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn rotation_stays_clamped() {
        let mut state = playing();
        state.ship.y = 300.0;
        state.ship.velocity = 100.0;
        for _ in 0..200 {
            state.ship.y = 300.0;
            tick(&mut state, &idle(), 0.0);
            assert!(state.ship.rotation <= std::f32::consts::FRAC_PI_4 + 1e-6);
        }
        assert!(state.ship.rotation > 0.7);

        for _ in 0..200 {
            state.ship.y = 300.0;
            tick(&mut state, &TickInput { flap: true }, 0.0);
            assert!(state.ship.rotation >= -std::f32::consts::PI / 6.0 - 1e-6);
        }
        assert!(state.ship.rotation < -0.45);
    }

    proptest! {
        #[test]
        fn velocity_follows_closed_form(v0 in -10.0f32..10.0, n in 0usize..60) {
            let mut state = playing();
            state.ship.velocity = v0;
            state.ship.y = 300.0;
            for i in 0..n {
                // Pin y so the run never ends
                state.ship.y = 300.0;
                tick(&mut state, &TickInput::default(), i as f64);
            }
            let expected = v0 + n as f32 * 0.28;
            prop_assert!((state.ship.velocity - expected).abs() < 1e-3);
        }

        #[test]
        fn realised_gap_is_always_minimum(seed: u64, h in 100.0f32..3000.0) {
            let mut state = GameState::new(seed, Tuning::default(), 800.0, h);
            state.start_run(0.0);
            for _ in 0..20 {
                spawn_pipe(&mut state);
            }
            for pipe in &state.pipes {
                prop_assert!((pipe.bottom_y - pipe.top_height - 140.0).abs() < 1e-3);
                prop_assert!(pipe.top_height >= 100.0);
            }
        }
    }
}
