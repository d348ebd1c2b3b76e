//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// Which edge of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A player paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge x, center y
    pub pos: Vec2,
    /// Direction signal: -1 = up, 0 = still, 1 = down
    pub dir: i8,
}

impl Paddle {
    /// Paddle at its starting spot: pinned to its side, centered vertically
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => config.right_paddle_x(),
        };
        Self {
            side,
            pos: Vec2::new(x, config.field_height / 2.0),
            dir: 0,
        }
    }

    /// Move by the current direction signal and clamp between the walls.
    /// A still paddle is left untouched.
    pub fn step(&mut self, dt: f32, config: &GameConfig) {
        if self.dir == 0 {
            return;
        }
        self.pos.y += self.dir as f32 * config.paddle_speed * dt;
        self.pos.y = config.clamp_paddle_y(self.pos.y);
    }

    /// Inclusive x range in which the ball counts as touching this paddle
    pub fn hit_band(&self, config: &GameConfig) -> (f32, f32) {
        match self.side {
            Side::Left => (
                self.pos.x + config.hit_band_near,
                self.pos.x + config.hit_band_far,
            ),
            Side::Right => {
                let face = self.pos.x + config.thickness;
                (face - config.hit_band_far, face - config.hit_band_near)
            }
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball served from the field center
    pub fn serve(config: &GameConfig) -> Self {
        let (vx, vy) = config.ball_start_vel;
        Self::new(
            Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
            Vec2::new(vx, vy),
        )
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Cleared when the game is over or a quit was requested
    pub running: bool,
    pub multiplayer: bool,
    pub left: Paddle,
    /// Present only in two-paddle mode
    pub right: Option<Paddle>,
    pub ball: Ball,
    /// Environment tick (ms) seen by the previous step
    pub ticks_count: u64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            running: true,
            multiplayer: config.multiplayer,
            left: Paddle::new(Side::Left, config),
            right: config
                .multiplayer
                .then(|| Paddle::new(Side::Right, config)),
            ball: Ball::serve(config),
            ticks_count: 0,
        }
    }

    /// Active paddles, left first
    pub fn paddles(&self) -> impl Iterator<Item = &Paddle> {
        std::iter::once(&self.left).chain(self.right.as_ref())
    }
}
