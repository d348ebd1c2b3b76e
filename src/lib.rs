//! Wall Pong - a paddle-versus-wall arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle motion, ball integration, collisions)
//! - `settings`: Immutable per-session configuration
//! - `input`: Held-key to direction mapping
//! - `renderer`: Frame composition (what gets drawn, not how)
//! - `platform`: Clock/input/canvas abstraction and the terminal backend
//! - `game`: Loop driver tying the above together

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{CascadeMode, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Field dimensions (one unit per pixel at full size)
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;
    /// Wall thickness - also the paddle width and the ball side
    pub const THICKNESS: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle speed (units per second)
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Paddle hit band, measured from the paddle's x toward the field center
    pub const HIT_BAND_NEAR: f32 = 20.0;
    pub const HIT_BAND_FAR: f32 = 25.0;

    /// Ball serve velocity
    pub const BALL_START_VEL_X: f32 = -200.0;
    pub const BALL_START_VEL_Y: f32 = 235.0;

    /// Maximum simulated step (seconds), regardless of frame stalls
    pub const MAX_DT: f32 = 0.05;
    /// Minimum frame interval in ticks (ms) - ~60 Hz
    pub const FRAME_INTERVAL_MS: u64 = 16;
}
