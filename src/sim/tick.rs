//! Per-frame simulation step
//!
//! Order is fixed: delta time, paddles, ball integration, collisions.

use super::collision::{self, Contact};
use super::state::GameState;
use crate::settings::GameConfig;

/// Input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle direction (-1 up, 0 still, 1 down)
    pub left_dir: i8,
    /// Right paddle direction, ignored without a right paddle
    pub right_dir: i8,
    /// Environment clock reading in milliseconds
    pub ticks: u64,
}

/// What happened during a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Effective delta time (seconds) after clamping
    pub dt: f32,
    pub contacts: Vec<Contact>,
    /// The step cleared the running flag
    pub game_over: bool,
}

/// Convert elapsed ticks to seconds, clamped to the configured maximum
pub fn delta_seconds(last_ticks: u64, ticks: u64, max_delta: f32) -> f32 {
    let dt = ticks.wrapping_sub(last_ticks) as f32 / 1000.0;
    dt.min(max_delta)
}

/// Clamp an arbitrary direction signal into {-1, 0, 1}
#[inline]
pub fn clamp_dir(dir: i8) -> i8 {
    dir.clamp(-1, 1)
}

/// Advance the game by one frame
pub fn advance(state: &mut GameState, config: &GameConfig, input: &TickInput) -> StepReport {
    let dt = delta_seconds(state.ticks_count, input.ticks, config.max_delta);
    state.ticks_count = input.ticks;

    if !state.running {
        return StepReport {
            dt,
            ..Default::default()
        };
    }

    state.left.dir = clamp_dir(input.left_dir);
    state.left.step(dt, config);
    if let Some(right) = state.right.as_mut() {
        right.dir = clamp_dir(input.right_dir);
        right.step(dt, config);
    }

    state.ball.integrate(dt);

    let contacts = collision::resolve(state, config);
    for contact in &contacts {
        log::debug!(
            "{:?} at ({:.1}, {:.1})",
            contact,
            state.ball.pos.x,
            state.ball.pos.y
        );
    }

    StepReport {
        dt,
        game_over: !state.running,
        contacts,
    }
}
