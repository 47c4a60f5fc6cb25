//! Screen/mode controller
//!
//! Player actions move the game between run statuses. Anything not listed
//! for the current status is rejected and leaves state untouched.

use crate::academy::AcademySession;
use crate::sim::{GameState, RunStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Splash -> Ready
    StartFlight,
    OpenAcademy,
    OpenGarage,
    OpenLeaderboard,
    /// Ready -> Playing
    Launch,
    /// Ready -> Splash
    Abort,
    /// GameOver -> Playing
    Relaunch,
    ReturnHome,
}

/// Apply an action. Returns false if it is not valid in the current status.
pub fn apply(
    state: &mut GameState,
    academy: &mut AcademySession,
    action: Action,
    now_ms: f64,
) -> bool {
    use RunStatus::*;

    let next = match (state.status, action) {
        (Splash, Action::StartFlight) => Ready,
        (Splash, Action::OpenAcademy) => {
            academy.enter();
            Academy
        }
        (Splash, Action::OpenGarage) => Garage,
        (Splash, Action::OpenLeaderboard) => Leaderboard,
        (Ready, Action::Launch) | (GameOver, Action::Relaunch) => {
            state.start_run(now_ms);
            return true;
        }
        (Ready, Action::Abort) => Splash,
        (GameOver | Academy | Garage | Leaderboard, Action::ReturnHome) => Splash,
        (status, action) => {
            log::debug!("Ignoring {:?} while {:?}", action, status);
            return false;
        }
    };

    state.status = next;
    true
}
