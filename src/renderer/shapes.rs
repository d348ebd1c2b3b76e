//! Shape generation for the field elements

use glam::Vec2;

use super::rect::{Rect, Shape, colors};
use crate::settings::GameConfig;
use crate::sim::{Paddle, Side};

/// Full-width wall along the top edge
pub fn top_wall(config: &GameConfig) -> Rect {
    Rect::new(
        Shape::TopWall,
        0.0,
        0.0,
        config.field_width,
        config.thickness,
        colors::WALL,
    )
}

/// Full-width wall along the bottom edge
pub fn bottom_wall(config: &GameConfig) -> Rect {
    Rect::new(
        Shape::BottomWall,
        0.0,
        config.field_height - config.thickness,
        config.field_width,
        config.thickness,
        colors::WALL,
    )
}

/// Full-height wall along the far edge (single-player only)
pub fn right_wall(config: &GameConfig) -> Rect {
    Rect::new(
        Shape::RightWall,
        config.field_width - config.thickness,
        0.0,
        config.thickness,
        config.field_height,
        colors::WALL,
    )
}

/// Paddle rectangle: left edge at `pos.x`, vertically centered on `pos.y`
pub fn paddle(paddle: &Paddle, config: &GameConfig) -> Rect {
    let shape = match paddle.side {
        Side::Left => Shape::LeftPaddle,
        Side::Right => Shape::RightPaddle,
    };
    Rect::new(
        shape,
        paddle.pos.x,
        paddle.pos.y - config.paddle_half_height(),
        config.thickness,
        config.paddle_height,
        colors::PADDLE,
    )
}

/// Square ball of side `thickness`, centered on the ball position
pub fn ball(center: Vec2, config: &GameConfig) -> Rect {
    let half = config.thickness / 2.0;
    Rect::new(
        Shape::Ball,
        center.x - half,
        center.y - half,
        config.thickness,
        config.thickness,
        colors::BALL,
    )
}
