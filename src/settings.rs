//! Session configuration
//!
//! Built once at startup and passed by reference into the simulation and the
//! renderer. Nothing mutates it while a session runs.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the collision cascade is evaluated each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CascadeMode {
    /// Two full passes per frame, both using the left-side hit band; the
    /// second pass tests against the right paddle's height when there is one
    #[default]
    Classic,
    /// One pass per active paddle with its own band and approach direction
    PerPaddle,
}

impl CascadeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CascadeMode::Classic => "classic",
            CascadeMode::PerPaddle => "per-paddle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(CascadeMode::Classic),
            "per-paddle" | "per_paddle" | "perpaddle" => Some(CascadeMode::PerPaddle),
            _ => None,
        }
    }
}

/// Immutable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Two paddles facing each other instead of one paddle and a far wall
    pub multiplayer: bool,
    /// Collision pass structure
    pub cascade: CascadeMode,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub thickness: f32,

    // === Paddles ===
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Hit band start, offset from the paddle's x toward the field center
    pub hit_band_near: f32,
    /// Hit band end, offset from the paddle's x toward the field center
    pub hit_band_far: f32,

    // === Ball ===
    pub ball_start_vel: (f32, f32),

    // === Timing ===
    /// Delta time clamp (seconds)
    pub max_delta: f32,
    /// Minimum ticks between frames
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            multiplayer: false,
            cascade: CascadeMode::default(),

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            thickness: THICKNESS,

            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            hit_band_near: HIT_BAND_NEAR,
            hit_band_far: HIT_BAND_FAR,

            ball_start_vel: (BALL_START_VEL_X, BALL_START_VEL_Y),

            max_delta: MAX_DT,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// One paddle against the far wall
    pub fn single_player() -> Self {
        Self::default()
    }

    /// Two paddles, no far wall
    pub fn two_player() -> Self {
        Self {
            multiplayer: true,
            ..Self::default()
        }
    }

    pub fn with_cascade(mut self, cascade: CascadeMode) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn paddle_half_height(&self) -> f32 {
        self.paddle_height / 2.0
    }

    /// Lowest allowed paddle center y
    pub fn paddle_min_y(&self) -> f32 {
        self.paddle_half_height() + self.thickness
    }

    /// Highest allowed paddle center y
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_half_height() - self.thickness
    }

    /// Clamp a paddle center y to the playable band between the walls
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y < self.paddle_min_y() {
            self.paddle_min_y()
        } else if y > self.paddle_max_y() {
            self.paddle_max_y()
        } else {
            y
        }
    }

    /// X position of the right paddle (its left edge)
    pub fn right_paddle_x(&self) -> f32 {
        self.field_width - self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_mode_round_trips_names() {
        for mode in [CascadeMode::Classic, CascadeMode::PerPaddle] {
            assert_eq!(CascadeMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(CascadeMode::from_str("PER_PADDLE"), Some(CascadeMode::PerPaddle));
        assert_eq!(CascadeMode::from_str("bogus"), None);
    }

    #[test]
    fn test_paddle_clamp_bounds() {
        let config = GameConfig::default();
        assert_eq!(config.paddle_min_y(), 65.0);
        assert_eq!(config.paddle_max_y(), 768.0 - 65.0);
        assert_eq!(config.clamp_paddle_y(0.0), 65.0);
        assert_eq!(config.clamp_paddle_y(10_000.0), 703.0);
        assert_eq!(config.clamp_paddle_y(300.0), 300.0);
    }

    #[test]
    fn test_two_player_only_flips_mode() {
        let single = GameConfig::single_player();
        let two = GameConfig::two_player();
        assert!(!single.multiplayer);
        assert!(two.multiplayer);
        assert_eq!(GameConfig { multiplayer: false, ..two }, single);
    }

    #[test]
    fn test_config_serializes_to_json() {
        let config = GameConfig::two_player().with_cascade(CascadeMode::PerPaddle);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"PerPaddle\""));
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
