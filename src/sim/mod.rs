//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the tick value in `TickInput`
//! - Fixed update order (paddles, ball, collisions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, PassContext};
pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{StepReport, TickInput, advance, clamp_dir, delta_seconds};
